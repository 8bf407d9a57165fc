use chrono::{DateTime, Utc};
use getservers_domain::{ServerSnapshot, SnapshotState};
use std::sync::Arc;

/// Application-layer port for the published snapshot state.
///
/// Both methods are synchronous — the state lives in memory and is swapped
/// as a whole value, so readers never block and never observe a torn
/// update. One writer (the refresh job), many readers (request handlers).
pub trait SnapshotStore: Send + Sync {
    /// The last-published state. Returns the initial empty state until the
    /// first successful refresh.
    fn current(&self) -> Arc<SnapshotState>;

    /// Replace the whole state with a freshly fetched snapshot.
    fn publish(&self, snapshot: ServerSnapshot, fetched_at: DateTime<Utc>);
}
