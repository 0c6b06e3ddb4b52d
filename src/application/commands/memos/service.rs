// src/application/commands/memos/service.rs
use std::sync::Arc;

use super::owner_lock::OwnerLocks;
use crate::{
    application::{ports::time::Clock, settings::MemoSettings},
    domain::memo::{MemoReadRepository, MemoWriteRepository, services::MemoSlugService},
};

pub struct MemoCommandService {
    pub(super) write_repo: Arc<dyn MemoWriteRepository>,
    pub(super) read_repo: Arc<dyn MemoReadRepository>,
    pub(super) slug_service: Arc<MemoSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) settings: MemoSettings,
    pub(super) owner_locks: OwnerLocks,
}

impl MemoCommandService {
    pub fn new(
        write_repo: Arc<dyn MemoWriteRepository>,
        read_repo: Arc<dyn MemoReadRepository>,
        slug_service: Arc<MemoSlugService>,
        clock: Arc<dyn Clock>,
        settings: MemoSettings,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
            settings,
            owner_locks: OwnerLocks::default(),
        }
    }
}
