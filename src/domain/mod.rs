//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Author Context: 作者
//! - Magazine Context: 杂志
//! - Article Context: 作者与杂志之间的文章
//!
//! 关系查询都是对文章登记表切片的纯函数，不缓存、不修改登记表

pub mod article;
pub mod author;
pub mod magazine;

mod errors;

pub use article::{Article, ArticleId, ArticleTitle};
pub use author::{Author, AuthorId, AuthorName};
pub use errors::ValidationError;
pub use magazine::{Category, Magazine, MagazineId, MagazineName};
