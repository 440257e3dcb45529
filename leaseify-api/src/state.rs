//! Shared application state for Axum routers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::store::MemStore;

/// Application-wide state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemStore>,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            store: Arc::new(MemStore::new()),
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}
