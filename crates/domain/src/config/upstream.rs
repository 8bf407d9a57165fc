use serde::{Deserialize, Serialize};

/// Upstream listing API and refresh cadence
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Base URL of the upstream listing API; `/servers` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Seconds between refresh ticks (default: 2)
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    /// Per-request timeout in seconds (default: 10)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            refresh_interval_secs: default_refresh_interval(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.getserve.rs/v1".to_string()
}

fn default_refresh_interval() -> u64 {
    2
}

fn default_request_timeout() -> u64 {
    10
}
