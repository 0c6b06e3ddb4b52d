// src/domain/memo/services/mod.rs
use std::collections::HashSet;
use std::sync::Arc;

use crate::application::ports::util::{SlugGenerator, TransliterationError, Transliterator};
use crate::domain::errors::DomainResult;
use crate::domain::memo::repository::MemoReadRepository;
use crate::domain::memo::value_objects::{MemoId, MemoSlug, MemoTitle, SLUG_MAX_LEN};
use crate::domain::user::UserId;

/// Longest base slug; the rest of `SLUG_MAX_LEN` is left for a `-{n}` suffix.
pub const MAX_BASE_SLUG_LEN: usize = SLUG_MAX_LEN - 21;

/// Slug used when a title yields nothing usable.
pub fn placeholder_slug(owner_id: UserId) -> String {
    format!("memo-{owner_id}")
}

/// Pick the base slug from the outcome of transliteration.
pub fn choose_base_slug(
    romanized: Result<String, TransliterationError>,
    generator: &dyn SlugGenerator,
    owner_id: UserId,
) -> String {
    match romanized {
        Ok(text) => {
            let slug = truncate_base_slug(&generator.slugify(&text));
            if slug.is_empty() {
                tracing::debug!(owner_id = %owner_id, "title produced an empty slug; using placeholder");
                placeholder_slug(owner_id)
            } else {
                slug
            }
        }
        Err(err) => {
            tracing::debug!(owner_id = %owner_id, error = %err, "transliteration failed; using placeholder");
            placeholder_slug(owner_id)
        }
    }
}

/// Cut `slug` to `MAX_BASE_SLUG_LEN` bytes, preferring the last hyphen inside
/// the limit, and drop trailing hyphens.
pub fn truncate_base_slug(slug: &str) -> String {
    if slug.len() <= MAX_BASE_SLUG_LEN {
        return slug.to_string();
    }

    let mut end = MAX_BASE_SLUG_LEN;
    while !slug.is_char_boundary(end) {
        end -= 1;
    }
    let head = &slug[..end];
    let cut = match head.rfind('-') {
        Some(pos) if pos > 0 => &head[..pos],
        _ => head,
    };
    cut.trim_end_matches('-').to_string()
}

/// First of `base`, `base-1`, `base-2`, … for which `is_taken` is false.
///
/// Terminates as long as `is_taken` answers from a finite set.
pub fn resolve_unique_slug(base: &str, mut is_taken: impl FnMut(&str) -> bool) -> String {
    if !is_taken(base) {
        return base.to_string();
    }

    let mut counter = 1u64;
    loop {
        let candidate = format!("{base}-{counter}");
        if !is_taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Domain service producing per-owner unique slugs for memos.
pub struct MemoSlugService {
    read_repo: Arc<dyn MemoReadRepository>,
    transliterator: Arc<dyn Transliterator>,
    generator: Arc<dyn SlugGenerator>,
}

impl MemoSlugService {
    pub fn new(
        read_repo: Arc<dyn MemoReadRepository>,
        transliterator: Arc<dyn Transliterator>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            transliterator,
            generator,
        }
    }

    pub fn base_slug(&self, title: &MemoTitle, owner_id: UserId) -> String {
        let romanized = self.transliterator.romanize(title.as_str());
        choose_base_slug(romanized, self.generator.as_ref(), owner_id)
    }

    pub async fn generate_unique_slug(
        &self,
        title: &MemoTitle,
        owner_id: UserId,
        ignore_id: Option<MemoId>,
    ) -> DomainResult<MemoSlug> {
        let base = self.base_slug(title, owner_id);
        let taken: HashSet<String> = self
            .read_repo
            .slugs_with_base(owner_id, &base, ignore_id)
            .await?
            .into_iter()
            .collect();

        let slug = resolve_unique_slug(&base, |candidate| taken.contains(candidate));
        tracing::debug!(owner_id = %owner_id, base = %base, slug = %slug, "resolved memo slug");
        MemoSlug::new(slug)
    }
}
