//! Session bring-up for the binary.
//!
//! Resolves the stored (or injected) token, reports who the visitor is, and
//! while authenticated streams unread-notification counts until Ctrl-C.

use std::sync::Arc;
use std::time::Duration;

use tokio::signal;
use tracing::{info, warn};

use crate::config::ConfigV1;
use crate::models::Token;
use crate::session::SessionState;
use crate::state::AppState;
use crate::watch::UnreadWatcher;

/// Bring up the client session and run until interrupted.
///
/// `IDEAHUB_TOKEN` in the environment takes precedence over the stored
/// token — the headless equivalent of arriving on an OAuth callback URL.
pub async fn run(config: Arc<ConfigV1>) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::from_config(config.clone());
    info!("Connecting to {}", state.api.base_url());

    match std::env::var("IDEAHUB_TOKEN") {
        Ok(raw) if !raw.trim().is_empty() => {
            let token = Token::new(raw.trim());
            if let Err(e) = state.session.login_with_token(token).await {
                warn!("IDEAHUB_TOKEN rejected: {}", e.humanize());
            }
        }
        _ => state.session.resolve().await,
    }

    let user = match state.session.state().await {
        SessionState::Authenticated(user) => user,
        _ => {
            info!("No valid session. Login through the library API or set IDEAHUB_TOKEN.");
            return Ok(());
        }
    };
    info!(username = %user.username, role = %user.role, "Session active");

    let watcher = UnreadWatcher::spawn(
        state.api.clone(),
        Duration::from_secs(config.notifications.poll_interval_secs),
    );
    let mut unread = watcher.subscribe();

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => break,
            changed = unread.changed() => {
                if changed.is_err() {
                    break;
                }
                let count = *unread.borrow_and_update();
                info!(count, "Unread notifications");
            }
        }
    }

    watcher.shutdown();
    info!("Shutting down");
    Ok(())
}
