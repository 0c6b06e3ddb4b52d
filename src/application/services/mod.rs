// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{memos::MemoCommandService, users::UserCommandService},
        dto::AuthenticatedUser,
        error::ApplicationError,
        ports::{
            security::{PasswordHasher, TokenManager},
            session_revocation::SessionRevocationStore,
            time::Clock,
            util::{SlugGenerator, Transliterator},
        },
        queries::{memos::MemoQueryService, users::UserQueryService},
        settings::MemoSettings,
    },
    domain::{
        memo::{MemoReadRepository, MemoWriteRepository, services::MemoSlugService},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub memo_commands: Arc<MemoCommandService>,
    pub memo_queries: Arc<MemoQueryService>,
    pub user_queries: Arc<UserQueryService>,
    token_manager: Arc<dyn TokenManager>,
    session_revocation_store: Arc<dyn SessionRevocationStore>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        memo_write_repo: Arc<dyn MemoWriteRepository>,
        memo_read_repo: Arc<dyn MemoReadRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        session_revocation_store: Arc<dyn SessionRevocationStore>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        transliterator: Arc<dyn Transliterator>,
        settings: MemoSettings,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&session_revocation_store),
            Arc::clone(&clock),
        ));

        let slug_service = Arc::new(MemoSlugService::new(
            Arc::clone(&memo_read_repo),
            Arc::clone(&transliterator),
            Arc::clone(&slugger),
        ));

        let memo_commands = Arc::new(MemoCommandService::new(
            Arc::clone(&memo_write_repo),
            Arc::clone(&memo_read_repo),
            slug_service,
            Arc::clone(&clock),
            settings.clone(),
        ));

        let memo_queries = Arc::new(MemoQueryService::new(
            Arc::clone(&memo_read_repo),
            Arc::clone(&user_repo),
            settings,
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        Self {
            user_commands,
            memo_commands,
            memo_queries,
            user_queries,
            token_manager,
            session_revocation_store,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    pub fn session_revocation_store(&self) -> Arc<dyn SessionRevocationStore> {
        Arc::clone(&self.session_revocation_store)
    }

    /// Authenticate a raw bearer token and reject sessions revoked by logout.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let user = self.token_manager.authenticate(token).await?;
        self.ensure_session_not_revoked(&user).await?;
        Ok(user)
    }

    async fn ensure_session_not_revoked(&self, user: &AuthenticatedUser) -> ApplicationResult<()> {
        if let Some(session_id) = &user.session_id {
            if self.session_revocation_store.is_revoked(session_id).await? {
                return Err(ApplicationError::unauthorized("session revoked"));
            }
        }
        Ok(())
    }
}
