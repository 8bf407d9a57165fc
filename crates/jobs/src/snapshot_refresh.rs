use getservers_application::use_cases::RefreshSnapshotUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub struct SnapshotRefreshJob {
    refresh: Arc<RefreshSnapshotUseCase>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl SnapshotRefreshJob {
    pub fn new(refresh: Arc<RefreshSnapshotUseCase>) -> Self {
        Self {
            refresh,
            interval: Duration::from_secs(2),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_ms = self.interval.as_millis() as u64,
            "Starting snapshot refresh job"
        );

        tokio::spawn(async move {
            // The interval's first tick completes immediately, so the cache
            // warms at startup rather than after one full period. Ticks
            // serialize behind an in-flight fetch; the request timeout on
            // the fetcher bounds how long one tick can stall the loop.
            let mut interval = tokio::time::interval(self.interval);

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("SnapshotRefreshJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.refresh.execute().await {
                            Ok(count) => {
                                info!(servers = count, "SnapshotRefreshJob: snapshot refreshed");
                            }
                            Err(e) => {
                                error!(
                                    error = %e,
                                    "SnapshotRefreshJob: refresh failed, keeping cached snapshot"
                                );
                            }
                        }
                    }
                }
            }
        });
    }
}
