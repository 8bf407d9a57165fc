
pub use mocks::{FetchOutcome, MockSnapshotFetcher, MockSnapshotStore};
