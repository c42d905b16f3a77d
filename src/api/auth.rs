//! Authentication endpoints: password login, identity resolution, and the
//! email-OTP registration pair.

use serde::Deserialize;
use serde_json::json;

use super::{ApiClient, OkResponse};
use crate::error::ClientError;
use crate::models::{Role, Token, User};

/// `GET /api/auth/me` envelope.
#[derive(Debug, Deserialize)]
pub struct MeResponse {
    #[serde(default)]
    pub ok: bool,
    pub user: User,
}

/// `POST /api/auth/login` envelope.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: Token,
}

/// `POST /api/auth/email/register/verify` envelope.
#[derive(Debug, Deserialize)]
pub struct RegisterVerifyResponse {
    #[serde(default)]
    pub ok: bool,
    pub token: Token,
}

impl ApiClient {
    /// Resolve the identity behind the currently stored token.
    pub async fn me(&self) -> Result<User, ClientError> {
        let res: MeResponse = self.get("/api/auth/me").await?;
        Ok(res.user)
    }

    /// Exchange credentials for a bearer token. The token is returned, not
    /// stored; session bookkeeping is the Session manager's job.
    pub async fn login(
        &self,
        email_or_username: &str,
        password: &str,
    ) -> Result<Token, ClientError> {
        let res: LoginResponse = self
            .post(
                "/api/auth/login",
                Some(json!({
                    "emailOrUsername": email_or_username,
                    "password": password,
                })),
            )
            .await?;
        Ok(res.token)
    }

    /// Start email-OTP registration; the platform mails a verification code.
    pub async fn register_start(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        let _: OkResponse = self
            .post(
                "/api/auth/email/register/start",
                Some(json!({
                    "username": username,
                    "email": email,
                    "password": password,
                })),
            )
            .await?;
        Ok(())
    }

    /// Finish registration with the mailed code; yields the account's first token.
    pub async fn register_verify(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: Role,
        code: &str,
    ) -> Result<Token, ClientError> {
        let res: RegisterVerifyResponse = self
            .post(
                "/api/auth/email/register/verify",
                Some(json!({
                    "username": username,
                    "email": email,
                    "password": password,
                    "role": role,
                    "code": code,
                })),
            )
            .await?;
        Ok(res.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::store::MemoryStore;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use std::sync::Arc;

    fn client(server: &Server) -> ApiClient {
        ApiClient::new(
            &ApiConfig {
                base_url: server.url(),
            },
            Arc::new(MemoryStore::new()),
        )
    }

    /// Test that login posts the platform's field names and returns the token.
    #[tokio::test]
    async fn test_login_posts_credentials() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/api/auth/login")
            .match_header("content-type", Matcher::Regex("application/json".into()))
            .match_body(Matcher::Json(json!({
                "emailOrUsername": "ada",
                "password": "pw",
            })))
            .with_status(200)
            .with_body(r#"{"token":"tok-1"}"#)
            .create_async()
            .await;

        let token = client(&server).login("ada", "pw").await.unwrap();
        assert_eq!(token.reveal(), "tok-1");
        m.assert_async().await;
    }

    /// Test that register_verify sends the role in lowercase and yields a token.
    #[tokio::test]
    async fn test_register_verify_sends_role_and_code() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/api/auth/email/register/verify")
            .match_body(Matcher::Json(json!({
                "username": "ada",
                "email": "ada@example.com",
                "password": "secret",
                "role": "company",
                "code": "123456",
            })))
            .with_status(200)
            .with_body(r#"{"ok":true,"token":"fresh"}"#)
            .create_async()
            .await;

        let token = client(&server)
            .register_verify("ada", "ada@example.com", "secret", Role::Company, "123456")
            .await
            .unwrap();
        assert_eq!(token.reveal(), "fresh");
        m.assert_async().await;
    }
}
