// src/domain/memo/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::memo::entity::{Memo, MemoUpdate, NewMemo};
use crate::domain::memo::value_objects::{Category, MemoId, MemoSlug};
use crate::domain::pagination::PageWindow;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Listing filter applied on top of the owner scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoFilter {
    pub category: Option<Category>,
}

#[async_trait]
pub trait MemoWriteRepository: Send + Sync {
    async fn insert(&self, memo: NewMemo) -> DomainResult<Memo>;
    async fn update(&self, update: MemoUpdate) -> DomainResult<Memo>;
    async fn delete(&self, owner_id: UserId, id: MemoId) -> DomainResult<()>;
}

/// Every read is scoped to one owner. Listings are ordered by priority,
/// updated_at, created_at and id, all descending.
#[async_trait]
pub trait MemoReadRepository: Send + Sync {
    async fn find_by_id(&self, owner_id: UserId, id: MemoId) -> DomainResult<Option<Memo>>;

    async fn find_by_slug(&self, owner_id: UserId, slug: &MemoSlug)
    -> DomainResult<Option<Memo>>;

    /// Slugs of `owner_id` equal to `base` or of the form `{base}-…`, skipping
    /// the memo identified by `exclude`.
    async fn slugs_with_base(
        &self,
        owner_id: UserId,
        base: &str,
        exclude: Option<MemoId>,
    ) -> DomainResult<Vec<String>>;

    async fn count(&self, owner_id: UserId, filter: MemoFilter) -> DomainResult<u64>;

    async fn list_page(
        &self,
        owner_id: UserId,
        filter: MemoFilter,
        window: PageWindow,
    ) -> DomainResult<Vec<Memo>>;
}
