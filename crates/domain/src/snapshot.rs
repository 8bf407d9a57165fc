use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// The most recently fetched upstream payload, held opaquely.
///
/// The upstream listing API returns a JSON object with a `servers` array plus
/// aggregate counts. Nothing here depends on that shape beyond the optional
/// `servers` array, which feeds logging and the health endpoint. The payload
/// is republished to clients exactly as it was received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerSnapshot(Value);

impl ServerSnapshot {
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    /// The documented empty value served before the first successful fetch.
    pub fn placeholder() -> Self {
        Self(json!({ "servers": [] }))
    }

    /// Length of the top-level `servers` array, 0 when absent or not an
    /// array. A payload without the array is still a valid snapshot.
    pub fn server_count(&self) -> usize {
        self.0
            .get("servers")
            .and_then(Value::as_array)
            .map(Vec::len)
            .unwrap_or(0)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Process-wide cache state. Starts empty, replaced as a whole on every
/// successful refresh, never mutated in place.
///
/// `last_success` is `Some` iff at least one fetch has ever succeeded, and
/// `snapshot` never reverts to `None` once populated.
#[derive(Debug, Clone, Default)]
pub struct SnapshotState {
    pub snapshot: Option<ServerSnapshot>,
    pub last_success: Option<DateTime<Utc>>,
}

impl SnapshotState {
    pub fn server_count(&self) -> usize {
        self.snapshot.as_ref().map_or(0, ServerSnapshot::server_count)
    }
}

/// Staleness summary derived from [`SnapshotState`] for the health endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotHealth {
    pub cached_data_exists: bool,
    pub last_fetch_time: Option<DateTime<Utc>>,
    pub server_count: usize,
}

impl From<&SnapshotState> for SnapshotHealth {
    fn from(state: &SnapshotState) -> Self {
        Self {
            cached_data_exists: state.snapshot.is_some(),
            last_fetch_time: state.last_success,
            server_count: state.server_count(),
        }
    }
}
