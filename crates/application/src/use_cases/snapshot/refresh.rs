use crate::ports::{SnapshotFetcher, SnapshotStore};
use chrono::Utc;
use getservers_domain::DomainError;
use std::sync::Arc;

pub struct RefreshSnapshotUseCase {
    fetcher: Arc<dyn SnapshotFetcher>,
    store: Arc<dyn SnapshotStore>,
}

impl RefreshSnapshotUseCase {
    pub fn new(fetcher: Arc<dyn SnapshotFetcher>, store: Arc<dyn SnapshotStore>) -> Self {
        Self { fetcher, store }
    }

    /// Fetch the latest listing and publish it, stamping the success time.
    ///
    /// Returns the number of server records in the new snapshot. On any
    /// failure the previously published state is left untouched and the
    /// error is returned for the refresh job to log — it never propagates
    /// past that boundary.
    pub async fn execute(&self) -> Result<usize, DomainError> {
        let snapshot = self.fetcher.fetch().await?;
        let count = snapshot.server_count();
        self.store.publish(snapshot, Utc::now());
        Ok(count)
    }
}
