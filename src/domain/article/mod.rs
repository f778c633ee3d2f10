//! Article Context - 文章限界上下文
//!
//! 文章是作者与杂志之间的连接实体，创建后不可变

mod entities;
mod value_objects;

pub use entities::Article;
pub use value_objects::{ArticleId, ArticleTitle};
