use super::UserCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

pub struct LogoutCommand;

impl UserCommandService {
    /// Revoke the session behind the presented token. Tokens without a
    /// session id have nothing to revoke.
    pub async fn logout(
        &self,
        actor: &AuthenticatedUser,
        _command: LogoutCommand,
    ) -> ApplicationResult<()> {
        if let Some(session_id) = &actor.session_id {
            self.session_revocation_store.revoke(session_id).await?;
            tracing::info!(user_id = %actor.id, "session revoked");
        }
        Ok(())
    }
}
