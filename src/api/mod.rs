//! Typed HTTP client for the IdeaHub platform API.
//!
//! `ApiClient` owns the transport concerns: attaching the bearer token when
//! one is stored, JSON bodies, and normalizing the platform's `{message,
//! code}` error envelope into [`ClientError`]. The per-area endpoint
//! wrappers live in sibling modules and are all `impl ApiClient` blocks.

pub mod admin;
pub mod auth;
pub mod ideas;
pub mod me;
pub mod notifications;

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::store::TokenStore;

pub use admin::AdminUserPage;
pub use auth::{LoginResponse, MeResponse, RegisterVerifyResponse};
pub use ideas::{BookmarkState, CommentPosted, IdeaDetail, IdeaPage, IdeaQuery, IdeaSort, LikeState};
pub use me::InterestRecord;

/// Client for the platform REST API. Cheap to clone; all clones share the
/// same connection pool and token store.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, store: Arc<dyn TokenStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            store,
        }
    }

    /// Base origin of the platform, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request and decode the JSON response.
    ///
    /// The Authorization header is attached iff the store currently holds a
    /// token. Response bodies that are not valid JSON are treated as `{}`;
    /// classification as success/failure follows the HTTP status alone.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "api request");

        let mut request = self.http.request(method, &url);
        if let Some(token) = self.store.get().await.map_err(ClientError::Store)? {
            request = request.bearer_auth(token.reveal());
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .unwrap_or_else(|_| Value::Object(Map::new()));

        if !status.is_success() {
            return Err(ClientError::from_envelope(status, &payload));
        }
        Ok(serde_json::from_value(payload)?)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request(Method::GET, path, None).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ClientError> {
        self.request(Method::POST, path, body).await
    }

    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ClientError> {
        self.request(Method::PUT, path, body).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request(Method::DELETE, path, None).await
    }
}

/// Envelope for endpoints that only acknowledge, e.g. `{"ok": true}`.
#[derive(Debug, serde::Deserialize)]
pub struct OkResponse {
    #[serde(default)]
    pub ok: bool,
}

/// Build a query string from key/value pairs, percent-encoding the values.
pub(crate) fn query_string(pairs: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (key, value) in pairs {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(key);
        out.push('=');
        out.push_str(&urlencoding::encode(value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::models::Token;
    use crate::store::MemoryStore;
    use mockito::{Matcher, Server};

    fn client_for(server: &Server) -> (ApiClient, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let client = ApiClient::new(
            &ApiConfig {
                base_url: server.url(),
            },
            store.clone(),
        );
        (client, store)
    }

    /// Test that a stored token is attached as a bearer Authorization header.
    #[tokio::test]
    async fn test_request_attaches_bearer_header() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/api/auth/me")
            .match_header("authorization", "Bearer abc")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let (client, store) = client_for(&server);
        store.set(&Token::new("abc")).await.unwrap();
        let _: OkResponse = client.get("/api/auth/me").await.unwrap();
        m.assert_async().await;
    }

    /// Test that no Authorization header is sent when the store is empty.
    #[tokio::test]
    async fn test_request_without_token_has_no_auth_header() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/api/ideas")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let (client, _store) = client_for(&server);
        let _: OkResponse = client.get("/api/ideas").await.unwrap();
        m.assert_async().await;
    }

    /// Test that a non-2xx JSON envelope surfaces its message and code.
    #[tokio::test]
    async fn test_error_envelope_is_decoded() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/ideas/i9")
            .with_status(404)
            .with_body(r#"{"message":"gone","code":"NOT_FOUND"}"#)
            .create_async()
            .await;

        let (client, _store) = client_for(&server);
        let err = client.get::<OkResponse>("/api/ideas/i9").await.unwrap_err();
        assert_eq!(err.code(), Some(&ErrorCode::NotFound));
        assert_eq!(err.humanize(), "Not found.");
    }

    /// Test that a non-JSON error body falls back to "HTTP <status>".
    #[tokio::test]
    async fn test_non_json_error_body_falls_back_to_status() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/ideas")
            .with_status(500)
            .with_body("<html>boom</html>")
            .create_async()
            .await;

        let (client, _store) = client_for(&server);
        let err = client.get::<OkResponse>("/api/ideas").await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn query_string_encodes_values() {
        assert_eq!(
            query_string(&[("keyword", "solar kettle"), ("page", "1")]),
            "keyword=solar%20kettle&page=1"
        );
    }
}
