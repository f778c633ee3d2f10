//! Magazine Command Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{ChangeMagazineCategory, CreateMagazine, RenameMagazine};
use crate::application::error::ApplicationError;
use crate::application::ports::MagazineRepositoryPort;
use crate::domain::{Category, Magazine, MagazineId, MagazineName};

/// 杂志写操作响应
#[derive(Debug, Clone)]
pub struct MagazineChangeResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
}

impl From<&Magazine> for MagazineChangeResponse {
    fn from(magazine: &Magazine) -> Self {
        Self {
            id: *magazine.id().as_uuid(),
            name: magazine.name().to_string(),
            category: magazine.category().to_string(),
        }
    }
}

// ============================================================================
// CreateMagazine
// ============================================================================

/// CreateMagazine Handler
pub struct CreateMagazineHandler {
    magazine_repo: Arc<dyn MagazineRepositoryPort>,
}

impl CreateMagazineHandler {
    pub fn new(magazine_repo: Arc<dyn MagazineRepositoryPort>) -> Self {
        Self { magazine_repo }
    }

    pub fn handle(&self, command: CreateMagazine) -> Result<MagazineChangeResponse, ApplicationError> {
        let name = MagazineName::new(command.name)
            .inspect_err(|e| tracing::warn!(error = %e, "Magazine rejected"))?;
        let category = Category::new(command.category)
            .inspect_err(|e| tracing::warn!(error = %e, "Magazine rejected"))?;
        let magazine = Magazine::new(name, category);

        self.magazine_repo.save(&magazine)?;

        tracing::info!(
            magazine_id = %magazine.id(),
            name = %magazine.name(),
            category = %magazine.category(),
            "Magazine created"
        );

        Ok(MagazineChangeResponse::from(&magazine))
    }
}

// ============================================================================
// RenameMagazine
// ============================================================================

/// RenameMagazine Handler
///
/// 校验在仓储锁内完成，失败时旧名称保持不变
pub struct RenameMagazineHandler {
    magazine_repo: Arc<dyn MagazineRepositoryPort>,
}

impl RenameMagazineHandler {
    pub fn new(magazine_repo: Arc<dyn MagazineRepositoryPort>) -> Self {
        Self { magazine_repo }
    }

    pub fn handle(&self, command: RenameMagazine) -> Result<MagazineChangeResponse, ApplicationError> {
        let mut old_name = String::new();
        let magazine = self
            .magazine_repo
            .modify(MagazineId::from_uuid(command.magazine_id), &mut |magazine| {
                old_name = magazine.name().to_string();
                magazine.rename(command.name.as_str())
            })
            .inspect_err(|e| {
                tracing::warn!(magazine_id = %command.magazine_id, error = %e, "Rename rejected")
            })?;

        tracing::info!(
            magazine_id = %magazine.id(),
            from = %old_name,
            to = %magazine.name(),
            "Magazine renamed"
        );

        Ok(MagazineChangeResponse::from(&magazine))
    }
}

// ============================================================================
// ChangeMagazineCategory
// ============================================================================

/// ChangeMagazineCategory Handler
pub struct ChangeMagazineCategoryHandler {
    magazine_repo: Arc<dyn MagazineRepositoryPort>,
}

impl ChangeMagazineCategoryHandler {
    pub fn new(magazine_repo: Arc<dyn MagazineRepositoryPort>) -> Self {
        Self { magazine_repo }
    }

    pub fn handle(
        &self,
        command: ChangeMagazineCategory,
    ) -> Result<MagazineChangeResponse, ApplicationError> {
        let magazine = self
            .magazine_repo
            .modify(MagazineId::from_uuid(command.magazine_id), &mut |magazine| {
                magazine.set_category(command.category.as_str())
            })
            .inspect_err(|e| {
                tracing::warn!(
                    magazine_id = %command.magazine_id,
                    error = %e,
                    "Category change rejected"
                )
            })?;

        tracing::info!(
            magazine_id = %magazine.id(),
            category = %magazine.category(),
            "Magazine category changed"
        );

        Ok(MagazineChangeResponse::from(&magazine))
    }
}
