use serde::Serialize;

/// Wire shape of `GET /api/health`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub cached_data_exists: bool,
    /// RFC 3339, `null` until the first successful fetch.
    pub last_fetch_time: Option<String>,
    pub server_count: usize,
}
