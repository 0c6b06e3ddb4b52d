use crate::{
    application::{
        dto::{AuthenticatedUser, MemoLocator},
        error::{ApplicationError, ApplicationResult},
    },
    domain::memo::{Memo, MemoId, MemoReadRepository, MemoSlug},
};

/// Resolve a memo of `actor`. Memos of other owners, and locators that cannot
/// name any memo, are all reported as "not found".
pub(crate) async fn find_owned_memo(
    read_repo: &dyn MemoReadRepository,
    actor: &AuthenticatedUser,
    locator: &MemoLocator,
) -> ApplicationResult<Memo> {
    let found = match locator {
        MemoLocator::Id(raw) => match MemoId::new(*raw) {
            Ok(id) => read_repo.find_by_id(actor.id, id).await?,
            Err(_) => None,
        },
        MemoLocator::Slug(raw) => match MemoSlug::new(raw.as_str()) {
            Ok(slug) => read_repo.find_by_slug(actor.id, &slug).await?,
            Err(_) => None,
        },
    };

    found
        .filter(|memo| memo.is_owned_by(actor.id))
        .ok_or_else(|| ApplicationError::not_found("memo not found"))
}
