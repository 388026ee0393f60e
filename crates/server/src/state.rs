use std::sync::Arc;

use routewatch_storage::WatchStore;

pub struct AppState {
    pub store: Arc<dyn WatchStore>,
    /// "postgres" or "memory"; surfaced by /health.
    pub store_kind: &'static str,
}
