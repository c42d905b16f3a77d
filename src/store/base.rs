use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use super::{file_store::FileStore, memory_store::MemoryStore};
use crate::config::{StoreBackend, StoreConfig};
use crate::models::Token;

/// The TokenStore trait abstracts where the session token lives
/// (get, overwrite, delete). The token is a single process-wide slot.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn get(&self) -> Result<Option<Token>, String>;
    async fn set(&self, token: &Token) -> Result<(), String>;
    async fn clear(&self) -> Result<(), String>;
    fn is_persistent(&self) -> bool {
        // Real backends survive a restart; the in-memory fallback does not.
        true
    }
}

/// Creates a concrete store implementation based on the StoreConfig.
/// If `store.enabled = false`, the token is held in memory for this process only.
pub fn create_store(config: &StoreConfig) -> Arc<dyn TokenStore> {
    if !config.enabled {
        info!("Token store is disabled. Session will not survive a restart.");
        return Arc::new(MemoryStore::new());
    }

    match &config.backend {
        Some(StoreBackend::File(file_config)) => {
            info!("Using file token store at {:?}", file_config.path);
            Arc::new(FileStore::new(file_config))
        }
        None => {
            error!("Store is enabled, but no backend config is provided!");
            std::process::exit(1);
        }
    }
}
