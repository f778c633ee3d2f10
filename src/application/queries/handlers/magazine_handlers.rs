//! Magazine Query Handlers

use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use super::{ArticleResponse, AuthorResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    ArticleRepositoryPort, AuthorRepositoryPort, MagazineRepositoryPort,
};
use crate::application::queries::{
    GetContributingAuthors, GetMagazine, GetMagazineArticleTitles, GetMagazineArticles,
    GetMagazineContributors, GetTopPublisher, ListMagazines,
};
use crate::domain::{Magazine, MagazineId};

// ============================================================================
// Response DTOs
// ============================================================================

/// 杂志响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MagazineResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Magazine> for MagazineResponse {
    fn from(magazine: &Magazine) -> Self {
        Self {
            id: *magazine.id().as_uuid(),
            name: magazine.name().to_string(),
            category: magazine.category().to_string(),
            created_at: magazine.created_at().to_rfc3339(),
            updated_at: magazine.updated_at().to_rfc3339(),
        }
    }
}

fn load_magazine(
    magazine_repo: &dyn MagazineRepositoryPort,
    magazine_id: Uuid,
) -> Result<Magazine, ApplicationError> {
    magazine_repo
        .find_by_id(MagazineId::from_uuid(magazine_id))?
        .ok_or_else(|| ApplicationError::not_found("Magazine", magazine_id))
}

// ============================================================================
// Handlers
// ============================================================================

/// GetMagazine Handler
pub struct GetMagazineHandler {
    magazine_repo: Arc<dyn MagazineRepositoryPort>,
}

impl GetMagazineHandler {
    pub fn new(magazine_repo: Arc<dyn MagazineRepositoryPort>) -> Self {
        Self { magazine_repo }
    }

    pub fn handle(&self, query: GetMagazine) -> Result<MagazineResponse, ApplicationError> {
        let magazine = load_magazine(self.magazine_repo.as_ref(), query.magazine_id)?;
        Ok(MagazineResponse::from(&magazine))
    }
}

/// ListMagazines Handler
pub struct ListMagazinesHandler {
    magazine_repo: Arc<dyn MagazineRepositoryPort>,
}

impl ListMagazinesHandler {
    pub fn new(magazine_repo: Arc<dyn MagazineRepositoryPort>) -> Self {
        Self { magazine_repo }
    }

    pub fn handle(&self, _query: ListMagazines) -> Result<Vec<MagazineResponse>, ApplicationError> {
        let magazines = self.magazine_repo.find_all()?;
        Ok(magazines.iter().map(MagazineResponse::from).collect())
    }
}

/// GetMagazineArticles Handler
pub struct GetMagazineArticlesHandler {
    magazine_repo: Arc<dyn MagazineRepositoryPort>,
    article_repo: Arc<dyn ArticleRepositoryPort>,
}

impl GetMagazineArticlesHandler {
    pub fn new(
        magazine_repo: Arc<dyn MagazineRepositoryPort>,
        article_repo: Arc<dyn ArticleRepositoryPort>,
    ) -> Self {
        Self {
            magazine_repo,
            article_repo,
        }
    }

    pub fn handle(
        &self,
        query: GetMagazineArticles,
    ) -> Result<Vec<ArticleResponse>, ApplicationError> {
        let magazine = load_magazine(self.magazine_repo.as_ref(), query.magazine_id)?;
        let registry = self.article_repo.find_all()?;

        Ok(magazine
            .articles(&registry)
            .into_iter()
            .map(ArticleResponse::from)
            .collect())
    }
}

/// GetMagazineContributors Handler
pub struct GetMagazineContributorsHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
    magazine_repo: Arc<dyn MagazineRepositoryPort>,
    article_repo: Arc<dyn ArticleRepositoryPort>,
}

impl GetMagazineContributorsHandler {
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

    pub fn handle(
        &self,
        query: GetMagazineContributors,
    ) -> Result<Vec<AuthorResponse>, ApplicationError> {
        let magazine = load_magazine(self.magazine_repo.as_ref(), query.magazine_id)?;
        let registry = self.article_repo.find_all()?;
        let authors = self.author_repo.find_all()?;

        Ok(magazine
            .contributors(&registry, &authors)
            .into_iter()
            .map(AuthorResponse::from)
            .collect())
    }
}

/// GetMagazineArticleTitles Handler
///
/// 没有文章时返回空列表
pub struct GetMagazineArticleTitlesHandler {
    magazine_repo: Arc<dyn MagazineRepositoryPort>,
    article_repo: Arc<dyn ArticleRepositoryPort>,
}

impl GetMagazineArticleTitlesHandler {
    pub fn new(
        magazine_repo: Arc<dyn MagazineRepositoryPort>,
        article_repo: Arc<dyn ArticleRepositoryPort>,
    ) -> Self {
        Self {
            magazine_repo,
            article_repo,
        }
    }

    pub fn handle(&self, query: GetMagazineArticleTitles) -> Result<Vec<String>, ApplicationError> {
        let magazine = load_magazine(self.magazine_repo.as_ref(), query.magazine_id)?;
        let registry = self.article_repo.find_all()?;

        Ok(magazine
            .article_titles(&registry)
            .into_iter()
            .map(str::to_string)
            .collect())
    }
}

/// GetContributingAuthors Handler
pub struct GetContributingAuthorsHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
    magazine_repo: Arc<dyn MagazineRepositoryPort>,
    article_repo: Arc<dyn ArticleRepositoryPort>,
}

impl GetContributingAuthorsHandler {
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

    pub fn handle(
        &self,
        query: GetContributingAuthors,
    ) -> Result<Vec<AuthorResponse>, ApplicationError> {
        let magazine = load_magazine(self.magazine_repo.as_ref(), query.magazine_id)?;
        let registry = self.article_repo.find_all()?;
        let authors = self.author_repo.find_all()?;

        Ok(magazine
            .contributing_authors(&registry, &authors)
            .into_iter()
            .map(AuthorResponse::from)
            .collect())
    }
}

/// GetTopPublisher Handler
pub struct GetTopPublisherHandler {
    magazine_repo: Arc<dyn MagazineRepositoryPort>,
    article_repo: Arc<dyn ArticleRepositoryPort>,
}

impl GetTopPublisherHandler {
    pub fn new(
        magazine_repo: Arc<dyn MagazineRepositoryPort>,
        article_repo: Arc<dyn ArticleRepositoryPort>,
    ) -> Self {
        Self {
            magazine_repo,
            article_repo,
        }
    }

    pub fn handle(
        &self,
        _query: GetTopPublisher,
    ) -> Result<Option<MagazineResponse>, ApplicationError> {
        let magazines = self.magazine_repo.find_all()?;
        let registry = self.article_repo.find_all()?;

        Ok(Magazine::top_publisher(&magazines, &registry).map(MagazineResponse::from))
    }
}
