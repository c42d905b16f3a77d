use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where (and whether) the session token is persisted between runs.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct StoreConfig {
    /// When false the token lives in memory only and dies with the process.
    pub enabled: bool,
    #[serde(default)]
    pub backend: Option<StoreBackend>,
}

/// Configuration options for each token store backend.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
#[serde(tag = "type")]
pub enum StoreBackend {
    #[serde(rename = "file")]
    File(FileStoreConfig),
}

/// The config needed for the file-backed token store.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct FileStoreConfig {
    /// Path of the token file. Parent directories are created on demand.
    pub path: PathBuf,
}
