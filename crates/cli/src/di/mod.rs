use getservers_api::AppState;
use getservers_application::ports::SnapshotStore;
use getservers_application::use_cases::{
    GetCacheHealthUseCase, GetSnapshotUseCase, RefreshSnapshotUseCase,
};
use getservers_domain::{Config, DomainError};
use getservers_infrastructure::{HttpSnapshotFetcher, InMemorySnapshotStore};
use std::sync::Arc;

/// Wired application services shared by the background jobs and the web
/// server. Both sides see the same snapshot store.
pub struct Services {
    pub refresh_snapshot: Arc<RefreshSnapshotUseCase>,
    pub app_state: AppState,
}

pub fn build_services(config: &Config) -> Result<Services, DomainError> {
    let fetcher = Arc::new(HttpSnapshotFetcher::new(&config.upstream)?);
    let store: Arc<dyn SnapshotStore> = Arc::new(InMemorySnapshotStore::new());

    let refresh_snapshot = Arc::new(RefreshSnapshotUseCase::new(fetcher, store.clone()));
    let app_state = AppState {
        get_snapshot: Arc::new(GetSnapshotUseCase::new(store.clone())),
        get_health: Arc::new(GetCacheHealthUseCase::new(store)),
    };

    Ok(Services {
        refresh_snapshot,
        app_state,
    })
}
