//! getservers Infrastructure Layer
//!
//! Adapters behind the application ports: the reqwest-based upstream
//! client and the in-memory snapshot store.
pub mod cache;
pub mod upstream;

pub use cache::InMemorySnapshotStore;
pub use upstream::HttpSnapshotFetcher;
