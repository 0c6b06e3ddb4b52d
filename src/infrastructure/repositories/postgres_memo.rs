// src/infrastructure/repositories/postgres_memo.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::memo::{
    Category, Memo, MemoContent, MemoFilter, MemoId, MemoReadRepository, MemoSlug, MemoTitle,
    MemoUpdate, MemoWriteRepository, NewMemo, Priority,
};
use crate::domain::pagination::PageWindow;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const MEMO_COLUMNS: &str =
    "id, owner_id, title, slug, content, category, priority, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresMemoWriteRepository {
    pool: PgPool,
}

impl PostgresMemoWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresMemoReadRepository {
    pool: PgPool,
}

impl PostgresMemoReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MemoRow {
    id: i64,
    owner_id: i64,
    title: String,
    slug: String,
    content: String,
    category: String,
    priority: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<MemoRow> for Memo {
    type Error = DomainError;

    fn try_from(row: MemoRow) -> Result<Self, Self::Error> {
        Ok(Memo {
            id: MemoId::new(row.id)?,
            owner_id: UserId::new(row.owner_id)?,
            title: MemoTitle::new(row.title)?,
            slug: MemoSlug::new(row.slug)?,
            content: MemoContent::new(row.content)?,
            category: row.category.parse::<Category>()?,
            priority: Priority::from_rank(i64::from(row.priority))?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Escape `LIKE` metacharacters so `base` is matched literally.
fn like_prefix(base: &str) -> String {
    let mut escaped = String::with_capacity(base.len() + 2);
    for ch in base.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push_str("-%");
    escaped
}

#[async_trait]
impl MemoWriteRepository for PostgresMemoWriteRepository {
    async fn insert(&self, memo: NewMemo) -> DomainResult<Memo> {
        let NewMemo {
            owner_id,
            title,
            slug,
            content,
            category,
            priority,
            created_at,
            updated_at,
        } = memo;

        let row = sqlx::query_as::<_, MemoRow>(&format!(
            "INSERT INTO memos (owner_id, title, slug, content, category, priority, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {MEMO_COLUMNS}"
        ))
        .bind(i64::from(owner_id))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(category.as_str())
        .bind(priority.rank())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Memo::try_from(row)
    }

    async fn update(&self, update: MemoUpdate) -> DomainResult<Memo> {
        let MemoUpdate {
            id,
            owner_id,
            title,
            content,
            category,
            priority,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE memos SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }

        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category.as_str());
        }

        if let Some(priority) = priority {
            builder.push(", priority = ");
            builder.push_bind(priority.rank());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND owner_id = ");
        builder.push_bind(i64::from(owner_id));
        builder.push(" RETURNING ");
        builder.push(MEMO_COLUMNS);

        let row = builder
            .build_query_as::<MemoRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("memo not found".into()))?;

        Memo::try_from(row)
    }

    async fn delete(&self, owner_id: UserId, id: MemoId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM memos WHERE id = $1 AND owner_id = $2")
            .bind(i64::from(id))
            .bind(i64::from(owner_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("memo not found".into()));
        }
        Ok(())
    }
}

impl PostgresMemoReadRepository {
    fn apply_conditions<'a>(
        builder: &mut QueryBuilder<'a, Postgres>,
        owner_id: UserId,
        filter: MemoFilter,
    ) {
        builder.push(" WHERE owner_id = ");
        builder.push_bind(i64::from(owner_id));

        if let Some(category) = filter.category {
            builder.push(" AND category = ");
            builder.push_bind(category.as_str());
        }
    }
}

#[async_trait]
impl MemoReadRepository for PostgresMemoReadRepository {
    async fn find_by_id(&self, owner_id: UserId, id: MemoId) -> DomainResult<Option<Memo>> {
        let row = sqlx::query_as::<_, MemoRow>(&format!(
            "SELECT {MEMO_COLUMNS} FROM memos WHERE owner_id = $1 AND id = $2"
        ))
        .bind(i64::from(owner_id))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Memo::try_from).transpose()
    }

    async fn find_by_slug(
        &self,
        owner_id: UserId,
        slug: &MemoSlug,
    ) -> DomainResult<Option<Memo>> {
        let row = sqlx::query_as::<_, MemoRow>(&format!(
            "SELECT {MEMO_COLUMNS} FROM memos WHERE owner_id = $1 AND slug = $2"
        ))
        .bind(i64::from(owner_id))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Memo::try_from).transpose()
    }

    async fn slugs_with_base(
        &self,
        owner_id: UserId,
        base: &str,
        exclude: Option<MemoId>,
    ) -> DomainResult<Vec<String>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT slug FROM memos WHERE owner_id = ");
        builder.push_bind(i64::from(owner_id));
        builder.push(" AND (slug = ");
        builder.push_bind(base.to_string());
        builder.push(" OR slug LIKE ");
        builder.push_bind(like_prefix(base));
        builder.push(" ESCAPE '\\')");

        if let Some(id) = exclude {
            builder.push(" AND id <> ");
            builder.push_bind(i64::from(id));
        }

        builder
            .build_query_scalar::<String>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn count(&self, owner_id: UserId, filter: MemoFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(1) FROM memos");
        Self::apply_conditions(&mut builder, owner_id, filter);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map(|count| count.max(0) as u64)
            .map_err(map_sqlx)
    }

    async fn list_page(
        &self,
        owner_id: UserId,
        filter: MemoFilter,
        window: PageWindow,
    ) -> DomainResult<Vec<Memo>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(MEMO_COLUMNS);
        builder.push(" FROM memos");
        Self::apply_conditions(&mut builder, owner_id, filter);
        builder.push(" ORDER BY priority DESC, updated_at DESC, created_at DESC, id DESC");
        builder.push(" LIMIT ");
        builder.push_bind(i64::try_from(window.limit).unwrap_or(i64::MAX));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(window.offset).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<MemoRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Memo::try_from).collect()
    }
}
