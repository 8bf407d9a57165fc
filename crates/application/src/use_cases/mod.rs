pub mod snapshot;

// Re-export use cases
pub use snapshot::{GetCacheHealthUseCase, GetSnapshotUseCase, RefreshSnapshotUseCase};
