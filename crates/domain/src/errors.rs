use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Upstream transport failure: {0}")]
    UpstreamTransport(String),

    #[error("Upstream returned status {0}")]
    UpstreamStatus(u16),

    #[error("Snapshot parse failure: {0}")]
    SnapshotParse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
