//! Repository Ports - 出站端口
//!
//! 定义作者、杂志、文章登记表的抽象接口
//! 具体实现在 infrastructure 层（内存实现）

use thiserror::Error;

use crate::application::error::ApplicationError;
use crate::domain::{
    Article, ArticleId, Author, AuthorId, Magazine, MagazineId, ValidationError,
};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

// ============================================================================
// Author Repository
// ============================================================================

/// Author Repository Port
pub trait AuthorRepositoryPort: Send + Sync {
    /// 登记作者（id 重复时返回 Duplicate）
    fn save(&self, author: &Author) -> Result<(), RepositoryError>;

    /// 根据 ID 查找作者
    fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, RepositoryError>;

    /// 获取所有作者，按登记顺序
    fn find_all(&self) -> Result<Vec<Author>, RepositoryError>;
}

// ============================================================================
// Magazine Repository
// ============================================================================

/// Magazine Repository Port
pub trait MagazineRepositoryPort: Send + Sync {
    /// 登记杂志（id 重复时返回 Duplicate）
    fn save(&self, magazine: &Magazine) -> Result<(), RepositoryError>;

    /// 原子地修改已登记的杂志，返回修改后的快照
    ///
    /// `change` 在持有该杂志写锁期间执行，并发修改不会互相覆盖；
    /// 校验失败时保留旧值。杂志不存在时返回 NotFound
    fn modify(
        &self,
        id: MagazineId,
        change: &mut dyn FnMut(&mut Magazine) -> Result<(), ValidationError>,
    ) -> Result<Magazine, ApplicationError>;

    /// 根据 ID 查找杂志
    fn find_by_id(&self, id: MagazineId) -> Result<Option<Magazine>, RepositoryError>;

    /// 获取所有杂志，按登记顺序
    fn find_all(&self) -> Result<Vec<Magazine>, RepositoryError>;
}

// ============================================================================
// Article Repository
// ============================================================================

/// Article Repository Port
///
/// 只追加的文章登记表，没有删除操作
pub trait ArticleRepositoryPort: Send + Sync {
    /// 追加文章到登记表末尾
    fn append(&self, article: &Article) -> Result<(), RepositoryError>;

    /// 根据 ID 查找文章
    fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, RepositoryError>;

    /// 登记表快照，按创建顺序
    fn find_all(&self) -> Result<Vec<Article>, RepositoryError>;

    /// 已登记文章数
    fn count(&self) -> Result<usize, RepositoryError> {
        self.find_all().map(|articles| articles.len())
    }
}
