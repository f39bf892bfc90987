use crate::domain::model::HallId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Hands out one async mutex per hall so reservation attempts on the same
/// hall run one at a time while different halls proceed independently.
///
/// Entries are never evicted; one mutex stays allocated per hall ever seen,
/// which suits a fixed set of halls.
#[derive(Debug, Default)]
pub struct HallLocks {
    locks: Mutex<HashMap<HallId, Arc<Mutex<()>>>>,
}

impl HallLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, hall_id: HallId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            Arc::clone(locks.entry(hall_id).or_default())
        };
        lock.lock_owned().await
    }

    #[cfg(test)]
    async fn tracked_halls(&self) -> usize {
        self.locks.lock().await.len()
    }
}
