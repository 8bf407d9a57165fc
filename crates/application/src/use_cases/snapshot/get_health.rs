use crate::ports::SnapshotStore;
use getservers_domain::SnapshotHealth;
use std::sync::Arc;

pub struct GetCacheHealthUseCase {
    store: Arc<dyn SnapshotStore>,
}

impl GetCacheHealthUseCase {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> SnapshotHealth {
        SnapshotHealth::from(self.store.current().as_ref())
    }
}
