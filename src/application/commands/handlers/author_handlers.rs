//! Author Command Handlers

use std::sync::Arc;
use uuid::Uuid;

use super::article_handlers::{register_article, resolve_endpoints};
use super::CreateArticleResponse;
use crate::application::commands::{AddArticle, CreateAuthor};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    ArticleRepositoryPort, AuthorRepositoryPort, MagazineRepositoryPort,
};
use crate::domain::{Author, AuthorName};

// ============================================================================
// CreateAuthor
// ============================================================================

/// 创建作者响应
#[derive(Debug, Clone)]
pub struct CreateAuthorResponse {
    pub id: Uuid,
    pub name: String,
}

/// CreateAuthor Handler
pub struct CreateAuthorHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl CreateAuthorHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub fn handle(&self, command: CreateAuthor) -> Result<CreateAuthorResponse, ApplicationError> {
        let name = AuthorName::new(command.name)
            .inspect_err(|e| tracing::warn!(error = %e, "Author rejected"))?;
        let author = Author::new(name);

        self.author_repo.save(&author)?;

        tracing::info!(
            author_id = %author.id(),
            name = %author.name(),
            "Author created"
        );

        Ok(CreateAuthorResponse {
            id: *author.id().as_uuid(),
            name: author.name().to_string(),
        })
    }
}

// ============================================================================
// AddArticle
// ============================================================================

/// AddArticle Handler - 作者侧的写文章入口
pub struct AddArticleHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
    magazine_repo: Arc<dyn MagazineRepositoryPort>,
    article_repo: Arc<dyn ArticleRepositoryPort>,
}

impl AddArticleHandler {
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

    pub fn handle(&self, command: AddArticle) -> Result<CreateArticleResponse, ApplicationError> {
        let (author, magazine) = resolve_endpoints(
            self.author_repo.as_ref(),
            self.magazine_repo.as_ref(),
            command.author_id,
            command.magazine_id,
        )?;

        let article = author
            .add_article(&magazine, command.title)
            .inspect_err(|e| tracing::warn!(author_id = %author.id(), error = %e, "Article rejected"))?;

        register_article(self.article_repo.as_ref(), article)
    }
}
