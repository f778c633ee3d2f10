//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod article_commands;
mod author_commands;
mod magazine_commands;

pub mod handlers;

pub use article_commands::*;
pub use author_commands::*;
pub use magazine_commands::*;
