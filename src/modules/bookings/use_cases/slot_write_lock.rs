// Critical section around "check the slot, then write the booking".
//
// Every handler that can make a slot busy holds this lock from reading the
// reservation snapshot until the store write returns, so two requests for the
// same slot can never both pass the overlap check.

use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

#[derive(Clone, Default)]
pub struct SlotWriteLock {
    inner: Arc<Mutex<()>>,
}

impl SlotWriteLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self) -> MutexGuard<'_, ()> {
        self.inner.lock().await
    }
}
