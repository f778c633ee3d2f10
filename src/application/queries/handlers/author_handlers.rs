//! Author Query Handlers

use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use super::{ArticleResponse, MagazineResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    ArticleRepositoryPort, AuthorRepositoryPort, MagazineRepositoryPort,
};
use crate::application::queries::{
    GetAuthor, GetAuthorArticles, GetAuthorMagazines, GetAuthorTopicAreas, ListAuthors,
};
use crate::domain::{Author, AuthorId};

// ============================================================================
// Response DTOs
// ============================================================================

/// 作者响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: String,
}

impl From<&Author> for AuthorResponse {
    fn from(author: &Author) -> Self {
        Self {
            id: *author.id().as_uuid(),
            name: author.name().to_string(),
            created_at: author.created_at().to_rfc3339(),
        }
    }
}

fn load_author(
    author_repo: &dyn AuthorRepositoryPort,
    author_id: Uuid,
) -> Result<Author, ApplicationError> {
    author_repo
        .find_by_id(AuthorId::from_uuid(author_id))?
        .ok_or_else(|| ApplicationError::not_found("Author", author_id))
}

// ============================================================================
// Handlers
// ============================================================================

/// GetAuthor Handler
pub struct GetAuthorHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl GetAuthorHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub fn handle(&self, query: GetAuthor) -> Result<AuthorResponse, ApplicationError> {
        let author = load_author(self.author_repo.as_ref(), query.author_id)?;
        Ok(AuthorResponse::from(&author))
    }
}

/// ListAuthors Handler
pub struct ListAuthorsHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl ListAuthorsHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub fn handle(&self, _query: ListAuthors) -> Result<Vec<AuthorResponse>, ApplicationError> {
        let authors = self.author_repo.find_all()?;
        Ok(authors.iter().map(AuthorResponse::from).collect())
    }
}

/// GetAuthorArticles Handler
pub struct GetAuthorArticlesHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
    article_repo: Arc<dyn ArticleRepositoryPort>,
}

impl GetAuthorArticlesHandler {
    pub fn new(
        author_repo: Arc<dyn AuthorRepositoryPort>,
        article_repo: Arc<dyn ArticleRepositoryPort>,
    ) -> Self {
        Self {
            author_repo,
            article_repo,
        }
    }

    pub fn handle(&self, query: GetAuthorArticles) -> Result<Vec<ArticleResponse>, ApplicationError> {
        let author = load_author(self.author_repo.as_ref(), query.author_id)?;
        let registry = self.article_repo.find_all()?;

        Ok(author
            .articles(&registry)
            .into_iter()
            .map(ArticleResponse::from)
            .collect())
    }
}

/// GetAuthorMagazines Handler
pub struct GetAuthorMagazinesHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
    magazine_repo: Arc<dyn MagazineRepositoryPort>,
    article_repo: Arc<dyn ArticleRepositoryPort>,
}

impl GetAuthorMagazinesHandler {
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
        query: GetAuthorMagazines,
    ) -> Result<Vec<MagazineResponse>, ApplicationError> {
        let author = load_author(self.author_repo.as_ref(), query.author_id)?;
        let registry = self.article_repo.find_all()?;
        let magazines = self.magazine_repo.find_all()?;

        Ok(author
            .magazines(&registry, &magazines)
            .into_iter()
            .map(MagazineResponse::from)
            .collect())
    }
}

/// GetAuthorTopicAreas Handler
pub struct GetAuthorTopicAreasHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
    magazine_repo: Arc<dyn MagazineRepositoryPort>,
    article_repo: Arc<dyn ArticleRepositoryPort>,
}

impl GetAuthorTopicAreasHandler {
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

    pub fn handle(&self, query: GetAuthorTopicAreas) -> Result<Vec<String>, ApplicationError> {
        let author = load_author(self.author_repo.as_ref(), query.author_id)?;
        let registry = self.article_repo.find_all()?;
        let magazines = self.magazine_repo.find_all()?;

        Ok(author
            .topic_areas(&registry, &magazines)
            .into_iter()
            .map(str::to_string)
            .collect())
    }
}
