use async_trait::async_trait;
use getservers_application::ports::SnapshotFetcher;
use getservers_domain::config::UpstreamConfig;
use getservers_domain::{DomainError, ServerSnapshot};
use std::time::Duration;
use tracing::debug;

/// Fetches the server listing from the upstream API over HTTP.
///
/// Holds a persistent `reqwest::Client` so the connection pool survives
/// across refresh ticks.
pub struct HttpSnapshotFetcher {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSnapshotFetcher {
    pub fn new(config: &UpstreamConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent("getservers/0.3 (snapshot-refresh)")
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| DomainError::UpstreamTransport(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl SnapshotFetcher for HttpSnapshotFetcher {
    async fn fetch(&self) -> Result<ServerSnapshot, DomainError> {
        let url = format!("{}/servers", self.base_url);
        debug!(url = %url, "Fetching server listing");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::UpstreamTransport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::UpstreamStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::UpstreamTransport(e.to_string()))?;
        let payload = serde_json::from_slice(&body)
            .map_err(|e| DomainError::SnapshotParse(e.to_string()))?;

        Ok(ServerSnapshot::new(payload))
    }
}
