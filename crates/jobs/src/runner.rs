use crate::SnapshotRefreshJob;
use std::sync::Arc;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Use the builder pattern to register jobs, then call `.start()` once.
///
/// # Example
///
/// ```rust,ignore
/// JobRunner::new()
///     .with_snapshot_refresh(SnapshotRefreshJob::new(refresh))
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    snapshot_refresh: Option<SnapshotRefreshJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            snapshot_refresh: None,
        }
    }

    pub fn with_snapshot_refresh(mut self, job: SnapshotRefreshJob) -> Self {
        self.snapshot_refresh = Some(job);
        self
    }

    /// Start all registered background jobs.
    pub async fn start(self) {
        info!("Starting background job runner");

        if let Some(job) = self.snapshot_refresh {
            Arc::new(job).start().await;
        }

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
