//! Author Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use super::{AuthorId, AuthorName};
use crate::domain::article::Article;
use crate::domain::magazine::Magazine;
use crate::domain::ValidationError;

/// Author 聚合根
///
/// 不变量:
/// - name 非空，创建后不可变
/// - 不持有文章列表，作者与文章的关系通过扫描文章登记表得出
/// - 相等性只看 id，同名的两个作者不可互换
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    id: AuthorId,
    name: AuthorName,
    created_at: DateTime<Utc>,
}

impl Author {
    /// 创建新作者
    pub fn new(name: AuthorName) -> Self {
        Self {
            id: AuthorId::new(),
            name,
            created_at: Utc::now(),
        }
    }

    /// 该作者的所有文章，保持登记顺序
    pub fn articles<'a>(&self, registry: &'a [Article]) -> Vec<&'a Article> {
        registry
            .iter()
            .filter(|article| article.author() == self.id)
            .collect()
    }

    /// 该作者投过稿的杂志（去重，按首次出现排序）
    ///
    /// `magazines` 中找不到的杂志 id 会被跳过
    pub fn magazines<'a>(
        &self,
        registry: &[Article],
        magazines: &'a [Magazine],
    ) -> Vec<&'a Magazine> {
        let mut seen = HashSet::new();
        self.articles(registry)
            .into_iter()
            .map(Article::magazine)
            .filter(|id| seen.insert(*id))
            .filter_map(|id| {
                let found = magazines.iter().find(|magazine| magazine.id() == id);
                if found.is_none() {
                    tracing::debug!(author_id = %self.id, magazine_id = %id, "Magazine not listed, skipped");
                }
                found
            })
            .collect()
    }

    /// 该作者涉及的栏目分类（去重）
    pub fn topic_areas<'a>(&self, registry: &[Article], magazines: &'a [Magazine]) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.magazines(registry, magazines)
            .into_iter()
            .map(|magazine| magazine.category().as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// 以该作者身份为杂志写一篇文章
    ///
    /// 标题校验与 `Article::new` 共用同一条路径；返回的文章尚未登记
    pub fn add_article(
        &self,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> Result<Article, ValidationError> {
        Article::new(self, magazine, title)
    }

    // Getters
    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &AuthorName {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
