use crate::domain::memo::{Category, Memo, Priority};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MemoDto {
    pub id: i64,
    /// Owner's user id.
    pub user: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[schema(example = "personal")]
    pub category: String,
    #[schema(example = "medium")]
    pub priority: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Memo> for MemoDto {
    fn from(memo: Memo) -> Self {
        Self {
            id: memo.id.into(),
            user: memo.owner_id.into(),
            title: memo.title.into_inner(),
            slug: memo.slug.into_inner(),
            content: memo.content.into_inner(),
            category: memo.category.as_str().to_string(),
            priority: memo.priority.as_str().to_string(),
            created_at: memo.created_at,
            updated_at: memo.updated_at,
        }
    }
}

/// How a request addresses one of the actor's memos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoLocator {
    Id(i64),
    Slug(String),
}

/// Raw enum value as submitted by a client: a rank number, a name, or
/// anything else (kept so it can be reported as a field error).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ChoiceInput {
    Rank(i64),
    Name(String),
    Other(serde_json::Value),
}

impl ChoiceInput {
    pub fn into_priority(self) -> DomainResult<Priority> {
        match self {
            ChoiceInput::Rank(rank) => Priority::from_rank(rank),
            ChoiceInput::Name(name) => name.parse(),
            ChoiceInput::Other(value) => Err(DomainError::invalid_field(
                "priority",
                format!("{value} is not a valid choice"),
            )),
        }
    }

    pub fn into_category(self) -> DomainResult<Category> {
        match self {
            ChoiceInput::Name(name) => name.parse(),
            ChoiceInput::Rank(rank) => Err(DomainError::invalid_field(
                "category",
                format!("\"{rank}\" is not a valid choice"),
            )),
            ChoiceInput::Other(value) => Err(DomainError::invalid_field(
                "category",
                format!("{value} is not a valid choice"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_input_accepts_numbers_and_names() {
        let rank: ChoiceInput = serde_json::from_str("3").unwrap();
        assert_eq!(rank.into_priority().unwrap(), Priority::High);

        let name: ChoiceInput = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(name.into_priority().unwrap(), Priority::Low);

        let category: ChoiceInput = serde_json::from_str("\"hobby\"").unwrap();
        assert_eq!(category.into_category().unwrap(), Category::Hobby);
    }

    #[test]
    fn choice_input_reports_unexpected_values() {
        let other: ChoiceInput = serde_json::from_str("true").unwrap();
        assert!(matches!(other, ChoiceInput::Other(_)));
        assert!(other.clone().into_priority().is_err());
        assert!(other.into_category().is_err());

        let rank: ChoiceInput = serde_json::from_str("2").unwrap();
        assert!(rank.into_category().is_err());
    }
}
