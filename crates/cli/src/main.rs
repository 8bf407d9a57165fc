//! # getservers
//!
//! Edge server for the getServe.rs directory: polls the upstream listing
//! API on a fixed interval, caches the last-known-good snapshot, and serves
//! it alongside the front-end bundle.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use getservers_domain::CliOverrides;
use getservers_jobs::{JobRunner, SnapshotRefreshJob};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser)]
#[command(name = "getservers")]
#[command(version)]
#[command(about = "Game server directory with a periodic-refresh listing cache")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<String>,

    /// Web server port
    #[arg(short, long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short, long)]
    bind: Option<String>,

    /// Upstream listing API base URL
    #[arg(short, long)]
    upstream: Option<String>,

    /// Directory holding the built front-end bundle
    #[arg(long)]
    static_dir: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        upstream_base_url: cli.upstream.clone(),
        static_dir: cli.static_dir.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        port = config.server.port,
        bind = %config.server.bind_address,
        upstream = %config.upstream.base_url,
        refresh_interval_secs = config.upstream.refresh_interval_secs,
        "Configuration loaded"
    );

    let services = di::build_services(&config)?;

    let shutdown = CancellationToken::new();
    let refresh_job = SnapshotRefreshJob::new(services.refresh_snapshot.clone())
        .with_interval(Duration::from_secs(config.upstream.refresh_interval_secs))
        .with_cancellation(shutdown.clone());

    JobRunner::new()
        .with_snapshot_refresh(refresh_job)
        .start()
        .await;

    server::start_web_server(&config, services.app_state, shutdown.clone()).await?;

    // Web server drained; stop the refresh loop too.
    shutdown.cancel();

    Ok(())
}
