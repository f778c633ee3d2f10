//! Domain - Validation Errors
//!
//! 三个上下文共享同一种错误：构造或 setter 违反约束时同步返回

use thiserror::Error;

use super::{AuthorId, MagazineId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("author name must be a non-empty string")]
    EmptyAuthorName,

    #[error("magazine name must be between 2 and 16 characters, got {0}")]
    MagazineNameLength(usize),

    #[error("magazine category must be a non-empty string")]
    EmptyCategory,

    #[error("article title must be between 5 and 50 characters, got {0}")]
    TitleLength(usize),

    #[error("article author is not a registered author: {0}")]
    UnknownAuthor(AuthorId),

    #[error("article magazine is not a registered magazine: {0}")]
    UnknownMagazine(MagazineId),
}
