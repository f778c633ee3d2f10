//! Magazine Queries

use uuid::Uuid;

/// 获取杂志详情查询
#[derive(Debug, Clone)]
pub struct GetMagazine {
    pub magazine_id: Uuid,
}

/// 列出所有杂志查询（按登记顺序）
#[derive(Debug, Clone)]
pub struct ListMagazines;

/// 获取杂志文章查询
#[derive(Debug, Clone)]
pub struct GetMagazineArticles {
    pub magazine_id: Uuid,
}

/// 获取杂志撰稿人查询
#[derive(Debug, Clone)]
pub struct GetMagazineContributors {
    pub magazine_id: Uuid,
}

/// 获取杂志文章标题查询
#[derive(Debug, Clone)]
pub struct GetMagazineArticleTitles {
    pub magazine_id: Uuid,
}

/// 获取杂志主要撰稿人查询（投稿超过两篇）
#[derive(Debug, Clone)]
pub struct GetContributingAuthors {
    pub magazine_id: Uuid,
}

/// 获取文章数最多的杂志查询
#[derive(Debug, Clone)]
pub struct GetTopPublisher;
