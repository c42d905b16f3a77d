use std::sync::Arc;

use ideahub_client::config::{load_config, print_schema};
use ideahub_client::startup;
use ideahub_client::utils::logger::init_logging;
use tracing::error;

#[tokio::main]
async fn main() {
    if std::env::args().any(|arg| arg == "--schema") {
        print_schema();
        return;
    }

    let config = Arc::new(load_config());
    init_logging(&config.logging);

    if let Err(e) = startup::run(config).await {
        error!("Fatal: {}", e);
        std::process::exit(1);
    }
}
