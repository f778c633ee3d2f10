//! Magazine Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

use super::{Category, MagazineId, MagazineName};
use crate::domain::article::Article;
use crate::domain::author::{Author, AuthorId};
use crate::domain::ValidationError;

/// 投稿数超过该值的作者才算“主要撰稿人”
pub const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

/// Magazine 聚合根
///
/// 不变量:
/// - name 长度始终在 [2,16]，category 始终非空
/// - setter 校验失败时保留旧值
/// - 相等性只看 id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Magazine {
    id: MagazineId,
    name: MagazineName,
    category: Category,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Magazine {
    /// 创建新杂志
    pub fn new(name: MagazineName, category: Category) -> Self {
        let now = Utc::now();
        Self {
            id: MagazineId::new(),
            name,
            category,
            created_at: now,
            updated_at: now,
        }
    }

    /// 更新杂志名称
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.name = MagazineName::new(name)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// 更新杂志分类
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        self.category = Category::new(category)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// 刊登在本杂志的所有文章，保持登记顺序
    pub fn articles<'a>(&self, registry: &'a [Article]) -> Vec<&'a Article> {
        registry
            .iter()
            .filter(|article| article.magazine() == self.id)
            .collect()
    }

    /// 为本杂志写过稿的作者（去重，按首次出现排序）
    ///
    /// `authors` 中找不到的作者 id 会被跳过
    pub fn contributors<'a>(&self, registry: &[Article], authors: &'a [Author]) -> Vec<&'a Author> {
        let mut seen = HashSet::new();
        self.articles(registry)
            .into_iter()
            .map(Article::author)
            .filter(|id| seen.insert(*id))
            .filter_map(|id| {
                let found = authors.iter().find(|author| author.id() == id);
                if found.is_none() {
                    tracing::debug!(magazine_id = %self.id, author_id = %id, "Author not listed, skipped");
                }
                found
            })
            .collect()
    }

    /// 本杂志所有文章标题；没有文章时返回空列表
    pub fn article_titles<'a>(&self, registry: &'a [Article]) -> Vec<&'a str> {
        self.articles(registry)
            .into_iter()
            .map(|article| article.title().as_str())
            .collect()
    }

    /// 在本杂志发表超过两篇文章的作者；没有时返回空列表
    pub fn contributing_authors<'a>(
        &self,
        registry: &[Article],
        authors: &'a [Author],
    ) -> Vec<&'a Author> {
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for article in self.articles(registry) {
            *counts.entry(article.author()).or_default() += 1;
        }

        self.contributors(registry, authors)
            .into_iter()
            .filter(|author| {
                counts.get(&author.id()).copied().unwrap_or(0) > CONTRIBUTING_AUTHOR_THRESHOLD
            })
            .collect()
    }

    /// 文章数最多的杂志
    ///
    /// 没有任何文章时返回 `None`；并列时取 `magazines` 中靠前的那本
    pub fn top_publisher<'a>(magazines: &'a [Magazine], registry: &[Article]) -> Option<&'a Magazine> {
        let mut top: Option<(&Magazine, usize)> = None;
        for magazine in magazines {
            let count = magazine.articles(registry).len();
            if count > top.map_or(0, |(_, best)| best) {
                top = Some((magazine, count));
            }
        }
        top.map(|(magazine, _)| magazine)
    }

    // Getters
    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &MagazineName {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl PartialEq for Magazine {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Magazine {}

impl Hash for Magazine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::author::AuthorName;

    fn author(name: &str) -> Author {
        Author::new(AuthorName::new(name).unwrap())
    }

    fn magazine(name: &str, category: &str) -> Magazine {
        Magazine::new(
            MagazineName::new(name).unwrap(),
            Category::new(category).unwrap(),
        )
    }

    #[test]
    fn test_magazine_creation() {
        let vogue = magazine("Vogue", "Fashion");
        assert_eq!(vogue.name().as_str(), "Vogue");
        assert_eq!(vogue.category().as_str(), "Fashion");
    }

    #[test]
    fn test_rename() {
        let mut vogue = magazine("Vogue", "Fashion");
        vogue.rename("New Yorker").unwrap();
        assert_eq!(vogue.name().as_str(), "New Yorker");
    }

    #[test]
    fn test_invalid_rename_keeps_previous_name() {
        let mut vogue = magazine("Vogue", "Fashion");
        let updated_at = vogue.updated_at();

        assert_eq!(vogue.rename("A"), Err(ValidationError::MagazineNameLength(1)));
        assert_eq!(
            vogue.rename("New Yorker Plus Extra Long Title"),
            Err(ValidationError::MagazineNameLength(32))
        );
        assert_eq!(vogue.name().as_str(), "Vogue");
        assert_eq!(vogue.updated_at(), updated_at);
    }

    #[test]
    fn test_set_category() {
        let mut vogue = magazine("Vogue", "Fashion");
        vogue.set_category("Life Style").unwrap();
        assert_eq!(vogue.category().as_str(), "Life Style");

        assert_eq!(vogue.set_category(""), Err(ValidationError::EmptyCategory));
        assert_eq!(vogue.category().as_str(), "Life Style");
    }

    #[test]
    fn test_articles_and_titles() {
        let carry = author("Carry Bradshaw");
        let vogue = magazine("Vogue", "Fashion");
        let ad = magazine("AD", "Architecture");

        let registry = vec![
            carry.add_article(&vogue, "How to wear a tutu with style").unwrap(),
            carry.add_article(&ad, "2023 Eccentric Design Trends").unwrap(),
            carry.add_article(&vogue, "Dating life in NYC").unwrap(),
        ];

        assert_eq!(vogue.articles(&registry).len(), 2);
        assert_eq!(
            vogue.article_titles(&registry),
            ["How to wear a tutu with style", "Dating life in NYC"]
        );
    }

    #[test]
    fn test_no_articles_gives_empty_titles() {
        let vogue = magazine("Vogue", "Fashion");
        assert!(vogue.article_titles(&[]).is_empty());
    }

    #[test]
    fn test_contributors_are_unique() {
        let carry = author("Carry Bradshaw");
        let nathaniel = author("Nathaniel Hawthorne");
        let vogue = magazine("Vogue", "Fashion");
        let authors = vec![carry.clone(), nathaniel.clone()];

        let registry = vec![
            carry.add_article(&vogue, "How to wear a tutu with style").unwrap(),
            carry.add_article(&vogue, "How to be single and happy").unwrap(),
            nathaniel.add_article(&vogue, "Dating life in NYC").unwrap(),
        ];

        assert_eq!(vogue.contributors(&registry, &authors), vec![&carry, &nathaniel]);
    }

    #[test]
    fn test_unlisted_author_is_skipped() {
        let carry = author("Carry Bradshaw");
        let nathaniel = author("Nathaniel Hawthorne");
        let vogue = magazine("Vogue", "Fashion");

        let registry = vec![
            nathaniel.add_article(&vogue, "Fashion Trends").unwrap(),
            carry.add_article(&vogue, "Dating life in NYC").unwrap(),
        ];

        let listed = vec![carry.clone()];
        assert_eq!(vogue.contributors(&registry, &listed), [&carry]);
    }

    #[test]
    fn test_namesakes_are_separate_contributors() {
        let first = author("Carry Bradshaw");
        let second = author("Carry Bradshaw");
        let vogue = magazine("Vogue", "Fashion");
        let authors = vec![first.clone(), second.clone()];

        let registry = vec![
            first.add_article(&vogue, "How to wear a tutu with style").unwrap(),
            second.add_article(&vogue, "Dating life in NYC").unwrap(),
        ];

        assert_eq!(vogue.contributors(&registry, &authors).len(), 2);
    }

    #[test]
    fn test_contributing_authors_need_more_than_two() {
        let carry = author("Carry Bradshaw");
        let nathaniel = author("Nathaniel Hawthorne");
        let vogue = magazine("Vogue", "Fashion");
        let authors = vec![carry.clone(), nathaniel.clone()];

        let mut registry = vec![
            carry.add_article(&vogue, "How to wear a tutu with style").unwrap(),
            carry.add_article(&vogue, "How to be single and happy").unwrap(),
            nathaniel.add_article(&vogue, "Fashion Trends").unwrap(),
        ];
        assert!(vogue.contributing_authors(&registry, &authors).is_empty());

        registry.push(carry.add_article(&vogue, "Dating life in NYC").unwrap());
        assert_eq!(vogue.contributing_authors(&registry, &authors), vec![&carry]);
    }

    #[test]
    fn test_contributing_authors_counts_per_magazine() {
        let carry = author("Carry Bradshaw");
        let vogue = magazine("Vogue", "Fashion");
        let ad = magazine("AD", "Architecture");
        let authors = vec![carry.clone()];

        let registry = vec![
            carry.add_article(&vogue, "How to wear a tutu with style").unwrap(),
            carry.add_article(&vogue, "How to be single and happy").unwrap(),
            carry.add_article(&ad, "2023 Eccentric Design Trends").unwrap(),
        ];

        assert!(vogue.contributing_authors(&registry, &authors).is_empty());
    }

    #[test]
    fn test_top_publisher() {
        let carry = author("Carry Bradshaw");
        let vogue = magazine("Vogue", "Fashion");
        let ad = magazine("AD", "Architecture");
        let magazines = vec![vogue.clone(), ad.clone()];

        assert_eq!(Magazine::top_publisher(&magazines, &[]), None);

        let registry = vec![
            carry.add_article(&ad, "2023 Eccentric Design Trends").unwrap(),
            carry.add_article(&vogue, "How to wear a tutu with style").unwrap(),
            carry.add_article(&vogue, "Dating life in NYC").unwrap(),
        ];
        assert_eq!(Magazine::top_publisher(&magazines, &registry), Some(&vogue));
    }

    #[test]
    fn test_top_publisher_tie_goes_to_earlier_magazine() {
        let carry = author("Carry Bradshaw");
        let vogue = magazine("Vogue", "Fashion");
        let ad = magazine("AD", "Architecture");
        let magazines = vec![vogue.clone(), ad.clone()];

        let registry = vec![
            carry.add_article(&ad, "2023 Eccentric Design Trends").unwrap(),
            carry.add_article(&vogue, "How to wear a tutu with style").unwrap(),
        ];
        assert_eq!(Magazine::top_publisher(&magazines, &registry), Some(&vogue));
    }

    #[test]
    fn test_top_publisher_without_magazines() {
        assert_eq!(Magazine::top_publisher(&[], &[]), None);
    }
}
