//! Article Query Handlers

use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::ArticleRepositoryPort;
use crate::application::queries::{GetArticle, ListArticles};
use crate::domain::{Article, ArticleId};

/// 文章响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub magazine_id: Uuid,
    pub title: String,
    pub created_at: String,
}

impl From<&Article> for ArticleResponse {
    fn from(article: &Article) -> Self {
        Self {
            id: *article.id().as_uuid(),
            author_id: *article.author().as_uuid(),
            magazine_id: *article.magazine().as_uuid(),
            title: article.title().to_string(),
            created_at: article.created_at().to_rfc3339(),
        }
    }
}

/// GetArticle Handler
pub struct GetArticleHandler {
    article_repo: Arc<dyn ArticleRepositoryPort>,
}

impl GetArticleHandler {
    pub fn new(article_repo: Arc<dyn ArticleRepositoryPort>) -> Self {
        Self { article_repo }
    }

    pub fn handle(&self, query: GetArticle) -> Result<ArticleResponse, ApplicationError> {
        let article = self
            .article_repo
            .find_by_id(ArticleId::from_uuid(query.article_id))?
            .ok_or_else(|| ApplicationError::not_found("Article", query.article_id))?;

        Ok(ArticleResponse::from(&article))
    }
}

/// ListArticles Handler
pub struct ListArticlesHandler {
    article_repo: Arc<dyn ArticleRepositoryPort>,
}

impl ListArticlesHandler {
    pub fn new(article_repo: Arc<dyn ArticleRepositoryPort>) -> Self {
        Self { article_repo }
    }

    pub fn handle(&self, _query: ListArticles) -> Result<Vec<ArticleResponse>, ApplicationError> {
        let articles = self.article_repo.find_all()?;
        Ok(articles.iter().map(ArticleResponse::from).collect())
    }
}
