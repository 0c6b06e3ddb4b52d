// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use memo_core::domain::memo::*;
use memo_core::domain::user::UserId;

use super::mocks::fixed_now;

/// Builds a stored memo for seeding repositories directly.
pub struct MemoBuilder {
    id: i64,
    owner_id: i64,
    title: String,
    slug: String,
    content: String,
    category: Category,
    priority: Priority,
    updated_at: DateTime<Utc>,
}

impl MemoBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            owner_id: 7,
            title: format!("memo {id}"),
            slug: format!("memo-{id}"),
            content: "message".into(),
            category: Category::default(),
            priority: Priority::default(),
            updated_at: fixed_now() + Duration::seconds(id),
        }
    }

    pub fn owner(mut self, owner_id: i64) -> Self {
        self.owner_id = owner_id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn build(self) -> Memo {
        Memo {
            id: MemoId::new(self.id).unwrap(),
            owner_id: UserId::new(self.owner_id).unwrap(),
            title: MemoTitle::new(self.title).unwrap(),
            slug: MemoSlug::new(self.slug).unwrap(),
            content: MemoContent::new(self.content).unwrap(),
            category: self.category,
            priority: self.priority,
            created_at: self.updated_at,
            updated_at: self.updated_at,
        }
    }
}
