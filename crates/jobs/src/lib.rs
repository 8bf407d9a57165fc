pub mod runner;
pub mod snapshot_refresh;

pub use runner::JobRunner;
pub use snapshot_refresh::SnapshotRefreshJob;
