//! Background polling of the unread-notification count.
//!
//! The poll is an explicit, cancellable task rather than a free-floating
//! timer: whoever spawns it holds the handle, and dropping the handle tears
//! the task down, so an unmounted view can never leave an orphaned poller.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::api::ApiClient;

/// Handle to a running unread-count poller.
pub struct UnreadWatcher {
    task: JoinHandle<()>,
    rx: watch::Receiver<u64>,
}

impl UnreadWatcher {
    /// Start polling. The first fetch happens immediately, then every
    /// `period`. Fetch failures are logged and skipped; the previous count
    /// stands until a poll succeeds.
    pub fn spawn(api: ApiClient, period: Duration) -> Self {
        let (tx, rx) = watch::channel(0u64);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                match api.unread_count().await {
                    Ok(count) => {
                        if tx.send(count).is_err() {
                            break;
                        }
                    }
                    Err(e) => debug!("Unread poll failed: {}", e),
                }
            }
        });

        Self { task, rx }
    }

    /// A receiver that observes every published count.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.rx.clone()
    }

    /// Stop polling now. Idempotent.
    pub fn shutdown(&self) {
        self.task.abort();
    }
}

impl Drop for UnreadWatcher {
    fn drop(&mut self) {
        self.task.abort();
    }
}
