//! Article Queries

use uuid::Uuid;

/// 获取文章详情查询
#[derive(Debug, Clone)]
pub struct GetArticle {
    pub article_id: Uuid,
}

/// 列出登记表中所有文章查询（按创建顺序）
#[derive(Debug, Clone)]
pub struct ListArticles;
