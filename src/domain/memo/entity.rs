// src/domain/memo/entity.rs
use crate::domain::memo::value_objects::{
    Category, MemoContent, MemoId, MemoSlug, MemoTitle, Priority,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Memo {
    pub id: MemoId,
    pub owner_id: UserId,
    pub title: MemoTitle,
    pub slug: MemoSlug,
    pub content: MemoContent,
    pub category: Category,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Memo {
    pub fn is_owned_by(&self, owner_id: UserId) -> bool {
        self.owner_id == owner_id
    }
}

#[derive(Debug, Clone)]
pub struct NewMemo {
    pub owner_id: UserId,
    pub title: MemoTitle,
    pub slug: MemoSlug,
    pub content: MemoContent,
    pub category: Category,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field changes for an existing memo. There is no slug field: slugs are
/// assigned once at creation.
#[derive(Debug, Clone)]
pub struct MemoUpdate {
    pub id: MemoId,
    pub owner_id: UserId,
    pub title: Option<MemoTitle>,
    pub content: Option<MemoContent>,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub updated_at: DateTime<Utc>,
}

impl MemoUpdate {
    pub fn new(id: MemoId, owner_id: UserId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            owner_id,
            title: None,
            content: None,
            category: None,
            priority: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: MemoTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: MemoContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}
