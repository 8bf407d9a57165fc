use crate::ports::SnapshotStore;
use getservers_domain::SnapshotState;
use std::sync::Arc;

pub struct GetSnapshotUseCase {
    store: Arc<dyn SnapshotStore>,
}

impl GetSnapshotUseCase {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    /// Current cache state. Never blocks, never fails; empty until the
    /// first successful refresh.
    pub fn execute(&self) -> Arc<SnapshotState> {
        self.store.current()
    }
}
