use std::sync::Arc;

use tokio::sync::Mutex;

use tastetrail_auth::jwt::TokenKeys;
use tastetrail_storage::objects::ObjectStore;

use crate::config::AppConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: ObjectStore,
    pub config: Arc<AppConfig>,
    pub tokens: TokenKeys,
    /// Serializes read-modify-write cycles on stored documents (user
    /// records, duplicate checks) within this process.
    pub writes: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: ObjectStore, config: AppConfig) -> Self {
        let tokens = TokenKeys::from_secret(config.jwt_secret.as_bytes(), config.token_ttl_hours);
        Self {
            store,
            config: Arc::new(config),
            tokens,
            writes: Arc::new(Mutex::new(())),
        }
    }
}
