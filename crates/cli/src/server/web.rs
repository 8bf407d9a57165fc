use axum::http::HeaderValue;
use axum::Router;
use getservers_api::{create_api_routes, spa, AppState};
use getservers_domain::Config;
use std::net::SocketAddr;
use std::path::Path;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Assembles the full application router: the API under `/api`, static
/// assets from the bundle directory, and the rendered SPA entry document
/// for everything else.
pub fn create_app(config: &Config, state: AppState) -> Router {
    let static_dir = Path::new(&config.server.static_dir);
    let entry = spa::entry_router(static_dir.join("index.html"), config.site.clone());
    let static_files = ServeDir::new(static_dir).fallback(entry);

    Router::new()
        .nest("/api", create_api_routes(state))
        .fallback_service(static_files)
        .layer(cors_layer(&config.server.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| o.parse::<HeaderValue>().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

pub async fn start_web_server(
    config: &Config,
    state: AppState,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()?;
    let app = create_app(config, state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, static_dir = %config.server.static_dir, "Web server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    Ok(())
}

async fn shutdown_signal(shutdown: CancellationToken) {
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = shutdown.cancelled() => {}
    }
    info!("Shutdown signal received");
}
