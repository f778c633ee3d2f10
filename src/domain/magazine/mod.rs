//! Magazine Context - 杂志限界上下文
//!
//! 职责:
//! - 杂志聚合（名称、分类可修改，均需校验）
//! - 文章、撰稿人、标题等关系查询
//! - 跨杂志的 top publisher 统计

mod aggregate;
mod value_objects;

pub use aggregate::{Magazine, CONTRIBUTING_AUTHOR_THRESHOLD};
pub use value_objects::{Category, MagazineId, MagazineName};
