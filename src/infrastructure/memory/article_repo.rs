//! In-Memory Article Repository

use std::sync::{Arc, RwLock};

use crate::application::ports::{ArticleRepositoryPort, RepositoryError};
use crate::domain::{Article, ArticleId};

/// 内存文章登记表
///
/// 只追加的有序日志；同一把锁保护追加与快照读取
pub struct InMemoryArticleRepository {
    articles: RwLock<Vec<Article>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self {
            articles: RwLock::new(Vec::new()),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryArticleRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> RepositoryError {
    RepositoryError::StorageError("article registry lock poisoned".to_string())
}

impl ArticleRepositoryPort for InMemoryArticleRepository {
    fn append(&self, article: &Article) -> Result<(), RepositoryError> {
        let mut articles = self.articles.write().map_err(poisoned)?;
        if articles.iter().any(|existing| existing.id() == article.id()) {
            return Err(RepositoryError::Duplicate(article.id().to_string()));
        }
        articles.push(article.clone());
        tracing::debug!(article_id = %article.id(), total = articles.len(), "Article appended");
        Ok(())
    }

    fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, RepositoryError> {
        let articles = self.articles.read().map_err(poisoned)?;
        Ok(articles.iter().find(|article| article.id() == id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Article>, RepositoryError> {
        let articles = self.articles.read().map_err(poisoned)?;
        Ok(articles.clone())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        let articles = self.articles.read().map_err(poisoned)?;
        Ok(articles.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Author, AuthorName, Category, Magazine, MagazineName};

    #[test]
    fn test_append_keeps_creation_order() {
        let repo = InMemoryArticleRepository::new();
        let carry = Author::new(AuthorName::new("Carry Bradshaw").unwrap());
        let vogue = Magazine::new(
            MagazineName::new("Vogue").unwrap(),
            Category::new("Fashion").unwrap(),
        );

        let first = carry.add_article(&vogue, "How to wear a tutu with style").unwrap();
        let second = carry.add_article(&vogue, "Dating life in NYC").unwrap();
        repo.append(&first).unwrap();
        repo.append(&second).unwrap();

        assert_eq!(repo.find_all().unwrap(), vec![first.clone(), second]);
        assert_eq!(repo.count().unwrap(), 2);
        assert_eq!(repo.find_by_id(first.id()).unwrap(), Some(first.clone()));

        // 同一篇文章只能登记一次
        assert!(matches!(repo.append(&first), Err(RepositoryError::Duplicate(_))));
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_empty_registry() {
        let repo = InMemoryArticleRepository::new();
        assert!(repo.find_all().unwrap().is_empty());
        assert_eq!(repo.find_by_id(ArticleId::new()).unwrap(), None);
    }
}
