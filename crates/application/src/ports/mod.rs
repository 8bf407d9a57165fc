pub mod snapshot_fetcher;
pub mod snapshot_store;

pub use snapshot_fetcher::SnapshotFetcher;
pub use snapshot_store::SnapshotStore;
