/// Refresh Flow Tests
///
/// Exercise the real HTTP fetcher and in-memory store against a stub
/// upstream: fetch -> publish -> read, across the documented upstream
/// failure modes.

#[path = "../common/mod.rs"]
mod common;
use common::{StubUpstream, UpstreamScript};

use getservers_application::ports::SnapshotStore;
use getservers_application::use_cases::{
    GetCacheHealthUseCase, GetSnapshotUseCase, RefreshSnapshotUseCase,
};
use getservers_domain::config::UpstreamConfig;
use getservers_domain::DomainError;
use getservers_infrastructure::{HttpSnapshotFetcher, InMemorySnapshotStore};
use getservers_jobs::SnapshotRefreshJob;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

fn upstream_config(base_url: String) -> UpstreamConfig {
    UpstreamConfig {
        base_url,
        refresh_interval_secs: 2,
        request_timeout_secs: 2,
    }
}

struct Flow {
    refresh: RefreshSnapshotUseCase,
    get_snapshot: GetSnapshotUseCase,
    get_health: GetCacheHealthUseCase,
}

fn wire(base_url: String) -> Flow {
    let fetcher = Arc::new(HttpSnapshotFetcher::new(&upstream_config(base_url)).unwrap());
    let store: Arc<dyn SnapshotStore> = Arc::new(InMemorySnapshotStore::new());
    Flow {
        refresh: RefreshSnapshotUseCase::new(fetcher, store.clone()),
        get_snapshot: GetSnapshotUseCase::new(store.clone()),
        get_health: GetCacheHealthUseCase::new(store),
    }
}

/// An address nothing is listening on.
async fn dead_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

// ============================================================================
// Upstream success
// ============================================================================

#[tokio::test]
async fn test_success_populates_cache() {
    // Arrange
    let payload = json!({ "servers": [{"id": 1}, {"id": 2}], "countServers": 2 });
    let upstream = StubUpstream::start(vec![UpstreamScript::Json(payload.clone())]).await;
    let flow = wire(upstream.base_url());

    // Act
    let count = flow.refresh.execute().await.unwrap();

    // Assert
    assert_eq!(count, 2);
    let state = flow.get_snapshot.execute();
    assert_eq!(state.snapshot.as_ref().unwrap().as_value(), &payload);
    let health = flow.get_health.execute();
    assert!(health.cached_data_exists);
    assert_eq!(health.server_count, 2);
    assert_eq!(upstream.hits(), 1);
}

#[tokio::test]
async fn test_payload_without_servers_key_is_cached() {
    let upstream =
        StubUpstream::start(vec![UpstreamScript::Json(json!({ "countServers": 5 }))]).await;
    let flow = wire(upstream.base_url());

    let count = flow.refresh.execute().await.unwrap();

    assert_eq!(count, 0);
    let health = flow.get_health.execute();
    assert!(health.cached_data_exists);
    assert_eq!(health.server_count, 0);
}

// ============================================================================
// Upstream failures
// ============================================================================

#[tokio::test]
async fn test_status_error_keeps_previous_snapshot() {
    // Arrange - one good response, then a 500
    let upstream = StubUpstream::start(vec![
        UpstreamScript::Json(json!({ "servers": [{"id": 1}] })),
        UpstreamScript::Status(500),
    ])
    .await;
    let flow = wire(upstream.base_url());

    flow.refresh.execute().await.unwrap();
    let before = flow.get_health.execute();

    // Act
    let result = flow.refresh.execute().await;

    // Assert - error surfaced, cache and timestamp untouched
    assert!(matches!(result, Err(DomainError::UpstreamStatus(500))));
    let after = flow.get_health.execute();
    assert_eq!(after, before);
    assert_eq!(after.server_count, 1);
}

#[tokio::test]
async fn test_transport_error_before_any_success_leaves_cache_empty() {
    let flow = wire(dead_endpoint().await);

    let result = flow.refresh.execute().await;

    assert!(matches!(result, Err(DomainError::UpstreamTransport(_))));
    let state = flow.get_snapshot.execute();
    assert!(state.snapshot.is_none());
    let health = flow.get_health.execute();
    assert!(!health.cached_data_exists);
    assert!(health.last_fetch_time.is_none());
    assert_eq!(health.server_count, 0);
}

#[tokio::test]
async fn test_unparseable_body_is_a_parse_failure() {
    let upstream = StubUpstream::start(vec![UpstreamScript::NotJson]).await;
    let flow = wire(upstream.base_url());

    let result = flow.refresh.execute().await;

    assert!(matches!(result, Err(DomainError::SnapshotParse(_))));
    assert!(flow.get_snapshot.execute().snapshot.is_none());
}

// ============================================================================
// Job-driven end to end
// ============================================================================

#[tokio::test]
async fn test_refresh_job_against_stub_upstream() {
    // Arrange - a failure first, then stable successes
    let upstream = StubUpstream::start(vec![
        UpstreamScript::Status(502),
        UpstreamScript::Json(json!({ "servers": [{"id": 1}, {"id": 2}, {"id": 3}] })),
    ])
    .await;

    let fetcher =
        Arc::new(HttpSnapshotFetcher::new(&upstream_config(upstream.base_url())).unwrap());
    let store: Arc<dyn SnapshotStore> = Arc::new(InMemorySnapshotStore::new());
    let refresh = Arc::new(RefreshSnapshotUseCase::new(fetcher, store.clone()));
    let get_health = GetCacheHealthUseCase::new(store);

    let job = Arc::new(
        SnapshotRefreshJob::new(refresh).with_interval(Duration::from_millis(20)),
    );

    // Act
    job.start().await;
    sleep(Duration::from_millis(300)).await;

    // Assert - the loop rode out the 502 and cached the listing
    assert!(upstream.hits() >= 2);
    let health = get_health.execute();
    assert!(health.cached_data_exists);
    assert_eq!(health.server_count, 3);
}
