// src/application/commands/memos/owner_lock.rs
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::user::UserId;

/// One async mutex per owner. Memo creation holds it from slug resolution
/// until the insert returns, so two creations for the same owner cannot pick
/// the same free slug.
#[derive(Default)]
pub(super) struct OwnerLocks {
    locks: Mutex<HashMap<UserId, Arc<AsyncMutex<()>>>>,
}

impl OwnerLocks {
    pub(super) async fn acquire(&self, owner_id: UserId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(owner_id).or_default())
        };
        lock.lock_owned().await
    }
}
