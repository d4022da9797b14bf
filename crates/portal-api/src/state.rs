//! Shared application state handed to every handler.

use std::sync::Arc;

use portal_auth::{AuthGate, TokenService};
use portal_core::config::AppConfig;
use portal_database::UserStore;
use portal_service::UserDirectoryService;

/// Cheaply clonable bundle of configuration and services.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tokens: Arc<TokenService>,
    pub gate: Arc<AuthGate>,
    pub directory: Arc<UserDirectoryService>,
}

impl AppState {
    /// Wire every service on top of one user store.
    pub fn new(config: AppConfig, store: Arc<dyn UserStore>) -> Self {
        let tokens = Arc::new(TokenService::new(Arc::clone(&store), &config.auth));
        let gate = Arc::new(AuthGate::new(Arc::clone(&tokens)));
        let directory = Arc::new(UserDirectoryService::new(store, &config.auth));

        Self {
            config: Arc::new(config),
            tokens,
            gate,
            directory,
        }
    }
}
