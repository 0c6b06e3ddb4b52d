use super::{MemoQueryService, find_owned_memo};
use crate::application::{
    dto::{AuthenticatedUser, MemoDto, MemoLocator},
    error::ApplicationResult,
};

pub struct GetMemoByIdQuery {
    pub id: i64,
}

impl MemoQueryService {
    pub async fn get_memo_by_id(
        &self,
        actor: &AuthenticatedUser,
        query: GetMemoByIdQuery,
    ) -> ApplicationResult<MemoDto> {
        let memo = find_owned_memo(self.read_repo.as_ref(), actor, &MemoLocator::Id(query.id)).await?;
        Ok(memo.into())
    }
}
