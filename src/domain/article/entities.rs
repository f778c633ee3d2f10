//! Article Context - Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ArticleId, ArticleTitle};
use crate::domain::author::{Author, AuthorId};
use crate::domain::magazine::{Magazine, MagazineId};
use crate::domain::ValidationError;

/// 文章 - 连接作者与杂志的实体
///
/// 不变量:
/// - 创建后 author、magazine、title 都不可变
/// - 只引用作者与杂志的 id，不拥有它们
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: ArticleTitle,
    created_at: DateTime<Utc>,
}

impl Article {
    pub fn new(
        author: &Author,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: ArticleId::new(),
            author: author.id(),
            magazine: magazine.id(),
            title: ArticleTitle::new(title)?,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    pub fn title(&self) -> &ArticleTitle {
        &self.title
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
