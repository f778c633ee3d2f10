//! Article Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ValidationError;

/// 文章唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleId(Uuid);

impl ArticleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ArticleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 文章标题
///
/// 唯一的标题校验入口：长度按 Unicode 字符计，范围 [5,50]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub const MIN_CHARS: usize = 5;
    pub const MAX_CHARS: usize = 50;

    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        let len = title.chars().count();
        if !(Self::MIN_CHARS..=Self::MAX_CHARS).contains(&len) {
            return Err(ValidationError::TitleLength(len));
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ArticleTitle {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_length_boundaries() {
        assert!(ArticleTitle::new("a".repeat(5)).is_ok());
        assert!(ArticleTitle::new("a".repeat(50)).is_ok());
        assert_eq!(
            ArticleTitle::new("a".repeat(4)),
            Err(ValidationError::TitleLength(4))
        );
        assert_eq!(
            ArticleTitle::new("a".repeat(51)),
            Err(ValidationError::TitleLength(51))
        );
    }

    #[test]
    fn test_title_counts_chars_not_bytes() {
        // 五个字符，十五个字节
        assert!(ArticleTitle::new("春夏新风尚").is_ok());
        // 四个字符
        assert_eq!(
            ArticleTitle::new("春夏风尚"),
            Err(ValidationError::TitleLength(4))
        );
    }
}
