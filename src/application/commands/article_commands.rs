//! Article Commands

use uuid::Uuid;

/// 创建文章命令
#[derive(Debug, Clone)]
pub struct CreateArticle {
    pub author_id: Uuid,
    pub magazine_id: Uuid,
    pub title: String,
}
