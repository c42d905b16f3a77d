//! Shared application state.
//!
//! Bundles the components every part of the client needs: configuration,
//! the token store, the API client, and the session manager. Views receive
//! this by reference; all session mutation still goes through `Session`.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::ConfigV1;
use crate::session::Session;
use crate::store::{create_store, TokenStore};

/// Application state shared across the binary and embedding callers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// Token store holding the persisted bearer credential.
    pub store: Arc<dyn TokenStore>,
    /// Typed client for the platform API.
    pub api: ApiClient,
    /// Session manager deriving the current user from the token.
    pub session: Arc<Session>,
}

impl AppState {
    /// Wire up store -> api -> session from a loaded config.
    pub fn from_config(config: Arc<ConfigV1>) -> Self {
        let store = create_store(&config.store);
        let api = ApiClient::new(&config.api, store.clone());
        let session = Arc::new(Session::new(api.clone(), store.clone()));
        Self {
            config,
            store,
            api,
            session,
        }
    }
}
