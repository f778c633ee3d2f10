//! In-Memory Author Repository

use std::sync::Arc;

use super::sequenced_map::SequencedMap;
use crate::application::ports::{AuthorRepositoryPort, RepositoryError};
use crate::domain::{Author, AuthorId};

/// 内存作者登记表
pub struct InMemoryAuthorRepository {
    authors: SequencedMap<AuthorId, Author>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self {
            authors: SequencedMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthorRepositoryPort for InMemoryAuthorRepository {
    fn save(&self, author: &Author) -> Result<(), RepositoryError> {
        if !self.authors.insert_new(author.id(), author.clone()) {
            return Err(RepositoryError::Duplicate(author.id().to_string()));
        }
        tracing::debug!(author_id = %author.id(), total = self.authors.len(), "Author stored");
        Ok(())
    }

    fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, RepositoryError> {
        Ok(self.authors.get(&id))
    }

    fn find_all(&self) -> Result<Vec<Author>, RepositoryError> {
        Ok(self.authors.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AuthorName;

    #[test]
    fn test_author_lifecycle() {
        let repo = InMemoryAuthorRepository::new();
        let carry = Author::new(AuthorName::new("Carry Bradshaw").unwrap());
        let nathaniel = Author::new(AuthorName::new("Nathaniel Hawthorne").unwrap());

        repo.save(&carry).unwrap();
        repo.save(&nathaniel).unwrap();

        assert_eq!(repo.find_by_id(carry.id()).unwrap(), Some(carry.clone()));
        assert_eq!(repo.find_all().unwrap(), vec![carry.clone(), nathaniel]);

        // 重复登记
        assert!(matches!(
            repo.save(&carry),
            Err(RepositoryError::Duplicate(_))
        ));
    }

    #[test]
    fn test_unknown_author() {
        let repo = InMemoryAuthorRepository::new();
        assert_eq!(repo.find_by_id(AuthorId::new()).unwrap(), None);
    }
}
