//! Article Command Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::CreateArticle;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    ArticleRepositoryPort, AuthorRepositoryPort, MagazineRepositoryPort,
};
use crate::domain::{Article, Author, AuthorId, Magazine, MagazineId, ValidationError};

/// 创建文章响应
#[derive(Debug, Clone)]
pub struct CreateArticleResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub magazine_id: Uuid,
    pub title: String,
}

impl From<&Article> for CreateArticleResponse {
    fn from(article: &Article) -> Self {
        Self {
            id: *article.id().as_uuid(),
            author_id: *article.author().as_uuid(),
            magazine_id: *article.magazine().as_uuid(),
            title: article.title().to_string(),
        }
    }
}

/// 解析文章两端：作者与杂志都必须已登记
pub(super) fn resolve_endpoints(
    author_repo: &dyn AuthorRepositoryPort,
    magazine_repo: &dyn MagazineRepositoryPort,
    author_id: Uuid,
    magazine_id: Uuid,
) -> Result<(Author, Magazine), ApplicationError> {
    let author_id = AuthorId::from_uuid(author_id);
    let author = author_repo
        .find_by_id(author_id)?
        .ok_or(ValidationError::UnknownAuthor(author_id))?;

    let magazine_id = MagazineId::from_uuid(magazine_id);
    let magazine = magazine_repo
        .find_by_id(magazine_id)?
        .ok_or(ValidationError::UnknownMagazine(magazine_id))?;

    Ok((author, magazine))
}

/// 登记已通过校验的文章
pub(super) fn register_article(
    article_repo: &dyn ArticleRepositoryPort,
    article: Article,
) -> Result<CreateArticleResponse, ApplicationError> {
    article_repo.append(&article)?;

    tracing::info!(
        article_id = %article.id(),
        author_id = %article.author(),
        magazine_id = %article.magazine(),
        title = %article.title(),
        "Article created"
    );

    Ok(CreateArticleResponse::from(&article))
}

/// CreateArticle Handler
pub struct CreateArticleHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
    magazine_repo: Arc<dyn MagazineRepositoryPort>,
    article_repo: Arc<dyn ArticleRepositoryPort>,
}

impl CreateArticleHandler {
    pub fn new(
        author_repo: Arc<dyn AuthorRepositoryPort>,
        magazine_repo: Arc<dyn MagazineRepositoryPort>,
        article_repo: Arc<dyn ArticleRepositoryPort>,
    ) -> Self {
        Self {
            author_repo,
            magazine_repo,
            article_repo,
        }
    }

    pub fn handle(&self, command: CreateArticle) -> Result<CreateArticleResponse, ApplicationError> {
        let (author, magazine) = resolve_endpoints(
            self.author_repo.as_ref(),
            self.magazine_repo.as_ref(),
            command.author_id,
            command.magazine_id,
        )?;

        let article = Article::new(&author, &magazine, command.title)
            .inspect_err(|e| tracing::warn!(author_id = %author.id(), error = %e, "Article rejected"))?;

        register_article(self.article_repo.as_ref(), article)
    }
}
