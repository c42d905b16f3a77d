//! Admin endpoints. The platform enforces the role; the client just carries
//! the token and surfaces FORBIDDEN like any other error.

use serde::Deserialize;

use super::{query_string, ApiClient, OkResponse};
use crate::error::ClientError;
use crate::models::AdminUser;

/// `GET /api/admin/users` envelope.
#[derive(Debug, Deserialize)]
pub struct AdminUserPage {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub items: Vec<AdminUser>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
}

impl ApiClient {
    /// Search the user directory. `q` filters by username/email substring.
    pub async fn admin_list_users(
        &self,
        q: Option<&str>,
        page: u32,
        limit: u32,
    ) -> Result<AdminUserPage, ClientError> {
        let page = page.max(1).to_string();
        let limit = limit.to_string();
        let mut pairs: Vec<(&str, &str)> = Vec::new();
        if let Some(q) = q.map(str::trim).filter(|q| !q.is_empty()) {
            pairs.push(("q", q));
        }
        pairs.push(("page", &page));
        pairs.push(("limit", &limit));
        self.get(&format!("/api/admin/users?{}", query_string(&pairs)))
            .await
    }

    /// Delete a user and everything they own.
    pub async fn admin_delete_user(&self, id: &str) -> Result<(), ClientError> {
        let _: OkResponse = self.delete(&format!("/api/admin/users/{id}")).await?;
        Ok(())
    }
}
