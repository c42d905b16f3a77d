use std::sync::Arc;

use figment::{
    providers::{Format, Yaml},
    Figment,
};
use ideahub_client::config::{Config, ConfigV1};
use ideahub_client::state::AppState;

#[allow(dead_code)]
pub const TEST_CONFIG: &str = r#"
version: "1.0.0"
logging:
  level: "debug"
  format: "console"
api:
  base_url: "http://placeholder.invalid"
store:
  enabled: false
notifications:
  poll_interval_secs: 1
"#;

#[allow(dead_code)]
pub fn load_test_config(base_url: &str) -> ConfigV1 {
    let yaml = TEST_CONFIG.replace("http://placeholder.invalid", base_url);
    let config: Config = Figment::new()
        .merge(Yaml::string(&yaml))
        .extract()
        .expect("Failed to parse test config YAML");

    match config {
        Config::ConfigV1(cfg) => cfg,
    }
}

/// Build an AppState pointed at a mock server, with an in-memory token store.
#[allow(dead_code)]
pub fn build_state(base_url: &str) -> AppState {
    AppState::from_config(Arc::new(load_test_config(base_url)))
}
