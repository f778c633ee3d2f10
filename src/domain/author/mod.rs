//! Author Context - 作者限界上下文
//!
//! 职责:
//! - 作者聚合
//! - 由文章登记表推导作者的杂志与栏目分类

mod aggregate;
mod value_objects;

pub use aggregate::Author;
pub use value_objects::{AuthorId, AuthorName};
