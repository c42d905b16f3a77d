use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::models::{Role, Token, User};
use crate::store::TokenStore;

/// Where the session currently stands.
///
/// `Unresolved` exists only between construction and the first `resolve`;
/// the guard treats it exactly like `Resolving`.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    Unresolved,
    Resolving,
    Authenticated(User),
    Anonymous,
}

impl SessionState {
    /// True once resolution has produced an answer either way.
    pub fn is_settled(&self) -> bool {
        matches!(self, SessionState::Authenticated(_) | SessionState::Anonymous)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Single source of truth for "who is the current visitor".
///
/// The user is always derived from the stored token via the whoami endpoint,
/// never cached across runs. All state changes funnel through these methods;
/// overlapping resolutions are not deduplicated — they are idempotent reads
/// of the same identity, so the last write simply wins.
pub struct Session {
    api: ApiClient,
    store: Arc<dyn TokenStore>,
    state: RwLock<SessionState>,
}

impl Session {
    pub fn new(api: ApiClient, store: Arc<dyn TokenStore>) -> Self {
        Self {
            api,
            store,
            state: RwLock::new(SessionState::Unresolved),
        }
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.user().cloned()
    }

    /// The loading flag: true until the first resolution settles.
    pub async fn is_resolving(&self) -> bool {
        !self.state.read().await.is_settled()
    }

    async fn set_state(&self, next: SessionState) {
        *self.state.write().await = next;
    }

    /// Initial (or repeated) resolution of the stored token.
    ///
    /// No token means anonymous without touching the network. A token that
    /// the platform rejects — expired, revoked, or unreachable — is removed
    /// and the session falls back to anonymous; the error is not surfaced.
    pub async fn resolve(&self) {
        let token = match self.store.get().await {
            Ok(token) => token,
            Err(e) => {
                warn!("Could not read token store: {}", e);
                None
            }
        };

        let Some(token) = token else {
            self.set_state(SessionState::Anonymous).await;
            return;
        };

        debug!(token = %token, "Resolving stored session token");
        self.set_state(SessionState::Resolving).await;

        match self.api.me().await {
            Ok(user) => {
                info!(username = %user.username, "Session resolved");
                self.set_state(SessionState::Authenticated(user)).await;
            }
            Err(e) => {
                debug!("Stored token rejected ({}); clearing session", e);
                if let Err(e) = self.store.clear().await {
                    warn!("Could not clear rejected token: {}", e);
                }
                self.set_state(SessionState::Anonymous).await;
            }
        }
    }

    /// Store a freshly obtained token and resolve the identity behind it.
    ///
    /// On failure the error propagates and the token is left in the store —
    /// callers treat this as a fatal login error and decide whether to keep
    /// or discard the credential.
    pub async fn login_with_token(&self, token: Token) -> Result<User, ClientError> {
        self.store.set(&token).await.map_err(ClientError::Store)?;
        self.set_state(SessionState::Resolving).await;

        match self.api.me().await {
            Ok(user) => {
                info!(username = %user.username, "Logged in");
                self.set_state(SessionState::Authenticated(user.clone()))
                    .await;
                Ok(user)
            }
            Err(e) => {
                self.set_state(SessionState::Anonymous).await;
                Err(e)
            }
        }
    }

    /// Password login: exchange credentials for a token, then adopt it.
    pub async fn login(
        &self,
        email_or_username: &str,
        password: &str,
    ) -> Result<User, ClientError> {
        let token = self.api.login(email_or_username, password).await?;
        self.login_with_token(token).await
    }

    /// First half of email-OTP registration; the platform mails a code.
    pub async fn register_start(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        self.api.register_start(username, email, password).await
    }

    /// Second half of registration: verify the code, adopt the new token.
    pub async fn register_verify(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: Role,
        code: &str,
    ) -> Result<User, ClientError> {
        let token = self
            .api
            .register_verify(username, email, password, role, code)
            .await?;
        self.login_with_token(token).await
    }

    /// Drop the credential and the derived user. Purely local.
    pub async fn logout(&self) {
        if let Err(e) = self.store.clear().await {
            warn!("Could not clear token on logout: {}", e);
        }
        self.set_state(SessionState::Anonymous).await;
        info!("Logged out");
    }

    /// Re-derive the current user on demand, without touching the token.
    /// With no token stored this clears the user and skips the network.
    pub async fn refresh_me(&self) -> Result<Option<User>, ClientError> {
        let token = self.store.get().await.map_err(ClientError::Store)?;
        if token.is_none() {
            self.set_state(SessionState::Anonymous).await;
            return Ok(None);
        }

        let user = self.api.me().await?;
        self.set_state(SessionState::Authenticated(user.clone()))
            .await;
        Ok(Some(user))
    }
}
