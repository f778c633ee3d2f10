//! In-Memory Magazine Repository

use std::sync::Arc;

use super::sequenced_map::SequencedMap;
use crate::application::error::ApplicationError;
use crate::application::ports::{MagazineRepositoryPort, RepositoryError};
use crate::domain::{Magazine, MagazineId, ValidationError};

/// 内存杂志登记表
///
/// 保留登记顺序，top publisher 并列时依赖这个顺序
pub struct InMemoryMagazineRepository {
    magazines: SequencedMap<MagazineId, Magazine>,
}

impl InMemoryMagazineRepository {
    pub fn new() -> Self {
        Self {
            magazines: SequencedMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryMagazineRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MagazineRepositoryPort for InMemoryMagazineRepository {
    fn save(&self, magazine: &Magazine) -> Result<(), RepositoryError> {
        if !self.magazines.insert_new(magazine.id(), magazine.clone()) {
            return Err(RepositoryError::Duplicate(magazine.id().to_string()));
        }
        tracing::debug!(magazine_id = %magazine.id(), total = self.magazines.len(), "Magazine stored");
        Ok(())
    }

    fn modify(
        &self,
        id: MagazineId,
        change: &mut dyn FnMut(&mut Magazine) -> Result<(), ValidationError>,
    ) -> Result<Magazine, ApplicationError> {
        let magazine = self
            .magazines
            .modify(&id, |magazine| change(magazine))
            .ok_or_else(|| ApplicationError::not_found("Magazine", *id.as_uuid()))??;
        tracing::debug!(magazine_id = %id, "Magazine updated");
        Ok(magazine)
    }

    fn find_by_id(&self, id: MagazineId) -> Result<Option<Magazine>, RepositoryError> {
        Ok(self.magazines.get(&id))
    }

    fn find_all(&self) -> Result<Vec<Magazine>, RepositoryError> {
        Ok(self.magazines.values())
    }
}
