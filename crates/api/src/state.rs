use getservers_application::use_cases::{GetCacheHealthUseCase, GetSnapshotUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_snapshot: Arc<GetSnapshotUseCase>,
    pub get_health: Arc<GetCacheHealthUseCase>,
}
