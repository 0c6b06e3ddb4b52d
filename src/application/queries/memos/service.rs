use std::sync::Arc;

use crate::{
    application::settings::MemoSettings,
    domain::{memo::MemoReadRepository, user::UserRepository},
};

pub struct MemoQueryService {
    pub(super) read_repo: Arc<dyn MemoReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) settings: MemoSettings,
}

impl MemoQueryService {
    pub fn new(
        read_repo: Arc<dyn MemoReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        settings: MemoSettings,
    ) -> Self {
        Self {
            read_repo,
            user_repo,
            settings,
        }
    }
}
