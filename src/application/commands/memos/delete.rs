// src/application/commands/memos/delete.rs
use super::MemoCommandService;
use crate::application::{
    dto::{AuthenticatedUser, MemoLocator},
    error::ApplicationResult,
    queries::memos::find_owned_memo,
};

pub struct DeleteMemoCommand {
    pub target: MemoLocator,
}

impl MemoCommandService {
    pub async fn delete_memo(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteMemoCommand,
    ) -> ApplicationResult<()> {
        let memo = find_owned_memo(self.read_repo.as_ref(), actor, &command.target).await?;
        self.write_repo.delete(actor.id, memo.id).await?;
        tracing::info!(memo_id = i64::from(memo.id), owner_id = %actor.id, "memo deleted");
        Ok(())
    }
}
