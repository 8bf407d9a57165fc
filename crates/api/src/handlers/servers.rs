use crate::state::AppState;
use axum::{extract::State, Json};
use getservers_domain::ServerSnapshot;
use serde_json::Value;
use tracing::{debug, instrument};

/// Passthrough of the cached upstream snapshot. Serves the documented
/// `{"servers": []}` placeholder until the first successful refresh.
#[instrument(skip(state), name = "api_get_servers")]
pub async fn get_servers(State(state): State<AppState>) -> Json<Value> {
    let current = state.get_snapshot.execute();

    match &current.snapshot {
        Some(snapshot) => {
            debug!(servers = snapshot.server_count(), "Serving cached snapshot");
            Json(snapshot.as_value().clone())
        }
        None => {
            debug!("No snapshot cached yet, serving placeholder");
            Json(ServerSnapshot::placeholder().into_value())
        }
    }
}
