//! Catalog - 应用上下文
//!
//! 持有三个登记表及所有 Command/Query Handlers
//! 每个 Catalog 是一个独立的登记表，不存在进程级全局状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AddArticleHandler, ChangeMagazineCategoryHandler, CreateArticleHandler, CreateAuthorHandler,
    CreateMagazineHandler, RenameMagazineHandler,
    // Query handlers
    GetArticleHandler, GetAuthorArticlesHandler, GetAuthorHandler, GetAuthorMagazinesHandler,
    GetAuthorTopicAreasHandler, GetContributingAuthorsHandler, GetMagazineArticleTitlesHandler,
    GetMagazineArticlesHandler, GetMagazineContributorsHandler, GetMagazineHandler,
    GetTopPublisherHandler, ListArticlesHandler, ListAuthorsHandler, ListMagazinesHandler,
    // Ports
    ArticleRepositoryPort, AuthorRepositoryPort, MagazineRepositoryPort,
};
use crate::infrastructure::memory::{
    InMemoryArticleRepository, InMemoryAuthorRepository, InMemoryMagazineRepository,
};

/// 应用上下文
pub struct Catalog {
    // ========== Ports ==========
    pub author_repo: Arc<dyn AuthorRepositoryPort>,
    pub magazine_repo: Arc<dyn MagazineRepositoryPort>,
    pub article_repo: Arc<dyn ArticleRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_author_handler: CreateAuthorHandler,
    pub add_article_handler: AddArticleHandler,
    pub create_magazine_handler: CreateMagazineHandler,
    pub rename_magazine_handler: RenameMagazineHandler,
    pub change_category_handler: ChangeMagazineCategoryHandler,
    pub create_article_handler: CreateArticleHandler,

    // ========== Query Handlers ==========
    pub get_author_handler: GetAuthorHandler,
    pub list_authors_handler: ListAuthorsHandler,
    pub author_articles_handler: GetAuthorArticlesHandler,
    pub author_magazines_handler: GetAuthorMagazinesHandler,
    pub author_topic_areas_handler: GetAuthorTopicAreasHandler,
    pub get_magazine_handler: GetMagazineHandler,
    pub list_magazines_handler: ListMagazinesHandler,
    pub magazine_articles_handler: GetMagazineArticlesHandler,
    pub contributors_handler: GetMagazineContributorsHandler,
    pub article_titles_handler: GetMagazineArticleTitlesHandler,
    pub contributing_authors_handler: GetContributingAuthorsHandler,
    pub top_publisher_handler: GetTopPublisherHandler,
    pub get_article_handler: GetArticleHandler,
    pub list_articles_handler: ListArticlesHandler,
}

impl Catalog {
    /// 基于给定的登记表创建上下文
    pub fn new(
        author_repo: Arc<dyn AuthorRepositoryPort>,
        magazine_repo: Arc<dyn MagazineRepositoryPort>,
        article_repo: Arc<dyn ArticleRepositoryPort>,
    ) -> Self {
        Self {
            // Command handlers
            create_author_handler: CreateAuthorHandler::new(author_repo.clone()),
            add_article_handler: AddArticleHandler::new(
                author_repo.clone(),
                magazine_repo.clone(),
                article_repo.clone(),
            ),
            create_magazine_handler: CreateMagazineHandler::new(magazine_repo.clone()),
            rename_magazine_handler: RenameMagazineHandler::new(magazine_repo.clone()),
            change_category_handler: ChangeMagazineCategoryHandler::new(magazine_repo.clone()),
            create_article_handler: CreateArticleHandler::new(
                author_repo.clone(),
                magazine_repo.clone(),
                article_repo.clone(),
            ),

            // Query handlers
            get_author_handler: GetAuthorHandler::new(author_repo.clone()),
            list_authors_handler: ListAuthorsHandler::new(author_repo.clone()),
            author_articles_handler: GetAuthorArticlesHandler::new(
                author_repo.clone(),
                article_repo.clone(),
            ),
            author_magazines_handler: GetAuthorMagazinesHandler::new(
                author_repo.clone(),
                magazine_repo.clone(),
                article_repo.clone(),
            ),
            author_topic_areas_handler: GetAuthorTopicAreasHandler::new(
                author_repo.clone(),
                magazine_repo.clone(),
                article_repo.clone(),
            ),
            get_magazine_handler: GetMagazineHandler::new(magazine_repo.clone()),
            list_magazines_handler: ListMagazinesHandler::new(magazine_repo.clone()),
            magazine_articles_handler: GetMagazineArticlesHandler::new(
                magazine_repo.clone(),
                article_repo.clone(),
            ),
            contributors_handler: GetMagazineContributorsHandler::new(
                author_repo.clone(),
                magazine_repo.clone(),
                article_repo.clone(),
            ),
            article_titles_handler: GetMagazineArticleTitlesHandler::new(
                magazine_repo.clone(),
                article_repo.clone(),
            ),
            contributing_authors_handler: GetContributingAuthorsHandler::new(
                author_repo.clone(),
                magazine_repo.clone(),
                article_repo.clone(),
            ),
            top_publisher_handler: GetTopPublisherHandler::new(
                magazine_repo.clone(),
                article_repo.clone(),
            ),
            get_article_handler: GetArticleHandler::new(article_repo.clone()),
            list_articles_handler: ListArticlesHandler::new(article_repo.clone()),

            // Ports
            author_repo,
            magazine_repo,
            article_repo,
        }
    }

    /// 创建一个全新的内存登记表
    pub fn in_memory() -> Self {
        Self::new(
            InMemoryAuthorRepository::new().arc(),
            InMemoryMagazineRepository::new().arc(),
            InMemoryArticleRepository::new().arc(),
        )
    }
}
