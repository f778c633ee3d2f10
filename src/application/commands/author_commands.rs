//! Author Commands

use uuid::Uuid;

/// 创建作者命令
#[derive(Debug, Clone)]
pub struct CreateAuthor {
    pub name: String,
}

/// 作者为杂志写文章命令
#[derive(Debug, Clone)]
pub struct AddArticle {
    pub author_id: Uuid,
    pub magazine_id: Uuid,
    pub title: String,
}
