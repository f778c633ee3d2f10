//! Author Queries

use uuid::Uuid;

/// 获取作者详情查询
#[derive(Debug, Clone)]
pub struct GetAuthor {
    pub author_id: Uuid,
}

/// 列出所有作者查询
#[derive(Debug, Clone)]
pub struct ListAuthors;

/// 获取作者的文章查询
#[derive(Debug, Clone)]
pub struct GetAuthorArticles {
    pub author_id: Uuid,
}

/// 获取作者投过稿的杂志查询
#[derive(Debug, Clone)]
pub struct GetAuthorMagazines {
    pub author_id: Uuid,
}

/// 获取作者涉及的栏目分类查询
#[derive(Debug, Clone)]
pub struct GetAuthorTopicAreas {
    pub author_id: Uuid,
}
