use crate::{dto::HealthResponse, state::AppState};
use axum::{extract::State, Json};
use chrono::SecondsFormat;
use tracing::instrument;

#[instrument(skip(state), name = "api_health")]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let health = state.get_health.execute();

    Json(HealthResponse {
        status: "ok",
        cached_data_exists: health.cached_data_exists,
        last_fetch_time: health
            .last_fetch_time
            .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true)),
        server_count: health.server_count,
    })
}
