use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use getservers_application::ports::SnapshotStore;
use getservers_domain::{ServerSnapshot, SnapshotState};
use std::sync::Arc;

/// In-memory snapshot store.
///
/// The whole [`SnapshotState`] is swapped atomically via `ArcSwap` on each
/// publish, so readers always see either the old or the new state in full.
/// Lives for the process lifetime; nothing is persisted.
pub struct InMemorySnapshotStore {
    state: ArcSwap<SnapshotState>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self {
            state: ArcSwap::from_pointee(SnapshotState::default()),
        }
    }
}

impl Default for InMemorySnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn current(&self) -> Arc<SnapshotState> {
        self.state.load_full()
    }

    fn publish(&self, snapshot: ServerSnapshot, fetched_at: DateTime<Utc>) {
        self.state.store(Arc::new(SnapshotState {
            snapshot: Some(snapshot),
            last_success: Some(fetched_at),
        }));
    }
}
