// tests/support/mocks/memo_repo.rs
use async_trait::async_trait;
use memo_core::domain::errors::{DomainError, DomainResult};
use memo_core::domain::memo::{
    Memo, MemoFilter, MemoId, MemoReadRepository, MemoSlug, MemoUpdate, MemoWriteRepository,
    NewMemo,
};
use memo_core::domain::pagination::PageWindow;
use memo_core::domain::user::UserId;
use std::cmp::Reverse;
use std::sync::Mutex;

/// メモリ上のメモリポジトリ。`(owner_id, slug)` の一意制約も再現する。
#[derive(Default)]
pub struct InMemoryMemoRepo {
    state: Mutex<RepoState>,
}

#[derive(Default)]
struct RepoState {
    next_id: i64,
    memos: Vec<Memo>,
}

impl InMemoryMemoRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a memo as-is, keeping its id.
    pub fn seed(&self, memo: Memo) {
        let mut state = self.state.lock().unwrap();
        state.next_id = state.next_id.max(i64::from(memo.id));
        state.memos.push(memo);
    }

    pub fn all(&self) -> Vec<Memo> {
        self.state.lock().unwrap().memos.clone()
    }

    pub fn slugs_of(&self, owner_id: i64) -> Vec<String> {
        self.all()
            .into_iter()
            .filter(|memo| i64::from(memo.owner_id) == owner_id)
            .map(|memo| memo.slug.into_inner())
            .collect()
    }

    fn matching(&self, owner_id: UserId, filter: MemoFilter) -> Vec<Memo> {
        let mut memos: Vec<Memo> = self
            .all()
            .into_iter()
            .filter(|memo| memo.owner_id == owner_id)
            .filter(|memo| filter.category.is_none_or(|category| memo.category == category))
            .collect();
        memos.sort_by_key(|memo| {
            Reverse((
                memo.priority.rank(),
                memo.updated_at,
                memo.created_at,
                i64::from(memo.id),
            ))
        });
        memos
    }
}

#[async_trait]
impl MemoWriteRepository for InMemoryMemoRepo {
    async fn insert(&self, memo: NewMemo) -> DomainResult<Memo> {
        let mut state = self.state.lock().unwrap();
        if state
            .memos
            .iter()
            .any(|existing| existing.owner_id == memo.owner_id && existing.slug == memo.slug)
        {
            return Err(DomainError::Conflict(
                "slug already exists for this owner".into(),
            ));
        }
        state.next_id += 1;
        let created = Memo {
            id: MemoId::new(state.next_id)?,
            owner_id: memo.owner_id,
            title: memo.title,
            slug: memo.slug,
            content: memo.content,
            category: memo.category,
            priority: memo.priority,
            created_at: memo.created_at,
            updated_at: memo.updated_at,
        };
        state.memos.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: MemoUpdate) -> DomainResult<Memo> {
        let mut state = self.state.lock().unwrap();
        let memo = state
            .memos
            .iter_mut()
            .find(|memo| memo.id == update.id && memo.owner_id == update.owner_id)
            .ok_or_else(|| DomainError::NotFound("memo not found".into()))?;
        apply_update(memo, &update);
        Ok(memo.clone())
    }

    async fn delete(&self, owner_id: UserId, id: MemoId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.memos.len();
        state
            .memos
            .retain(|memo| !(memo.id == id && memo.owner_id == owner_id));
        if state.memos.len() == before {
            return Err(DomainError::NotFound("memo not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl MemoReadRepository for InMemoryMemoRepo {
    async fn find_by_id(&self, owner_id: UserId, id: MemoId) -> DomainResult<Option<Memo>> {
        Ok(self
            .all()
            .into_iter()
            .find(|memo| memo.owner_id == owner_id && memo.id == id))
    }

    async fn find_by_slug(
        &self,
        owner_id: UserId,
        slug: &MemoSlug,
    ) -> DomainResult<Option<Memo>> {
        Ok(self
            .all()
            .into_iter()
            .find(|memo| memo.owner_id == owner_id && &memo.slug == slug))
    }

    async fn slugs_with_base(
        &self,
        owner_id: UserId,
        base: &str,
        exclude: Option<MemoId>,
    ) -> DomainResult<Vec<String>> {
        let prefix = format!("{base}-");
        Ok(self
            .all()
            .into_iter()
            .filter(|memo| memo.owner_id == owner_id && Some(memo.id) != exclude)
            .map(|memo| memo.slug.into_inner())
            .filter(|slug| slug == base || slug.starts_with(&prefix))
            .collect())
    }

    async fn count(&self, owner_id: UserId, filter: MemoFilter) -> DomainResult<u64> {
        Ok(self.matching(owner_id, filter).len() as u64)
    }

    async fn list_page(
        &self,
        owner_id: UserId,
        filter: MemoFilter,
        window: PageWindow,
    ) -> DomainResult<Vec<Memo>> {
        Ok(self
            .matching(owner_id, filter)
            .into_iter()
            .skip(window.offset as usize)
            .take(window.limit as usize)
            .collect())
    }
}

fn apply_update(memo: &mut Memo, update: &MemoUpdate) {
    if let Some(title) = &update.title {
        memo.title = title.clone();
    }
    if let Some(content) = &update.content {
        memo.content = content.clone();
    }
    if let Some(category) = update.category {
        memo.category = category;
    }
    if let Some(priority) = update.priority {
        memo.priority = priority;
    }
    memo.updated_at = update.updated_at;
}
