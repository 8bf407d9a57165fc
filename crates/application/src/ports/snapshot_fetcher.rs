use async_trait::async_trait;
use getservers_domain::{DomainError, ServerSnapshot};

/// Application-layer port for fetching the upstream server listing.
///
/// The implementation lives in the infrastructure layer and is injected at
/// DI time. A successful fetch means the transport succeeded, the status
/// was a success and the body parsed as JSON; the three failure modes map
/// to the `UpstreamTransport`, `UpstreamStatus` and `SnapshotParse`
/// variants of [`DomainError`] and are treated identically by callers.
#[async_trait]
pub trait SnapshotFetcher: Send + Sync {
    async fn fetch(&self) -> Result<ServerSnapshot, DomainError>;
}
