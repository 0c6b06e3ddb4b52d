use super::{MemoQueryService, find_owned_memo};
use crate::application::{
    dto::{AuthenticatedUser, MemoDto, MemoLocator},
    error::ApplicationResult,
};

pub struct GetMemoBySlugQuery {
    pub slug: String,
}

impl MemoQueryService {
    pub async fn get_memo_by_slug(
        &self,
        actor: &AuthenticatedUser,
        query: GetMemoBySlugQuery,
    ) -> ApplicationResult<MemoDto> {
        let memo =
            find_owned_memo(self.read_repo.as_ref(), actor, &MemoLocator::Slug(query.slug)).await?;
        Ok(memo.into())
    }
}
