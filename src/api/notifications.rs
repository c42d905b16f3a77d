//! Notification feed endpoints, including the unread counter the watcher polls.

use serde::Deserialize;

use super::{query_string, ApiClient, OkResponse};
use crate::error::ClientError;
use crate::models::Notification;

#[derive(Debug, Deserialize)]
struct ItemsEnvelope {
    #[serde(default)]
    items: Vec<Notification>,
}

#[derive(Debug, Deserialize)]
struct CountEnvelope {
    #[serde(default)]
    count: u64,
}

impl ApiClient {
    pub async fn notifications(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Notification>, ClientError> {
        let qs = query_string(&[("page", &page.max(1).to_string()), ("limit", &limit.to_string())]);
        let res: ItemsEnvelope = self.get(&format!("/api/notifications?{qs}")).await?;
        Ok(res.items)
    }

    pub async fn unread_count(&self) -> Result<u64, ClientError> {
        let res: CountEnvelope = self.get("/api/notifications/unread-count").await?;
        Ok(res.count)
    }

    pub async fn mark_notification_read(&self, id: &str) -> Result<(), ClientError> {
        let _: OkResponse = self
            .post(&format!("/api/notifications/{id}/read"), None)
            .await?;
        Ok(())
    }

    pub async fn mark_all_notifications_read(&self) -> Result<(), ClientError> {
        let _: OkResponse = self.post("/api/notifications/read-all", None).await?;
        Ok(())
    }
}
