//! Author Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ValidationError;

/// 作者唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorId(Uuid);

impl AuthorId {
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

impl Default for AuthorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 作者姓名（非空，创建后不可变）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyAuthorName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AuthorName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for AuthorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(AuthorName::new(""), Err(ValidationError::EmptyAuthorName));
    }

    #[test]
    fn test_single_char_name_accepted() {
        assert_eq!(AuthorName::new("X").unwrap().as_str(), "X");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: AuthorName = serde_json::from_str("\"Carry Bradshaw\"").unwrap();
        assert_eq!(ok.as_str(), "Carry Bradshaw");
        assert!(serde_json::from_str::<AuthorName>("\"\"").is_err());
    }
}
