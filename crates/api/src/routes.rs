use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/servers", get(handlers::get_servers))
        .route("/health", get(handlers::health_check))
        .route("/games", get(handlers::list_games))
        .with_state(state)
}
