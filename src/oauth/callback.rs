use reqwest::Url;

use crate::error::ClientError;
use crate::models::Token;
use crate::session::Session;
use crate::utils::safe_next;

/// Query parameters carried by the provider's callback URL.
#[derive(Debug, Clone, Default)]
pub struct CallbackParams {
    pub token: Option<Token>,
    pub error: Option<String>,
    pub message: Option<String>,
    pub next: Option<String>,
}

impl CallbackParams {
    /// Parse a raw query string (without the leading `?`).
    pub fn from_query(query: &str) -> Self {
        // A synthetic origin makes Url do the percent-decoding for us.
        match Url::parse(&format!("http://localhost/?{query}")) {
            Ok(url) => Self::from_url(&url),
            Err(_) => Self::default(),
        }
    }

    pub fn from_url(url: &Url) -> Self {
        let mut params = Self::default();
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "token" => params.token = Some(Token::new(value.to_string())),
                "error" => params.error = Some(value.to_string()),
                "message" => params.message = Some(value.to_string()),
                "next" => params.next = Some(value.to_string()),
                _ => {}
            }
        }
        params
    }
}

/// Resume the session from an OAuth callback.
///
/// Returns the sanitized in-app path the caller should navigate to,
/// replacing history so the callback URL is not revisited via back-button.
///
/// A provider-reported error fails without touching any stored token; a
/// callback carrying neither token nor error is malformed and fails with
/// [`ClientError::MissingToken`].
pub async fn resolve_callback(
    session: &Session,
    params: &CallbackParams,
) -> Result<String, ClientError> {
    if let Some(error) = &params.error {
        let message = match &params.message {
            Some(detail) => format!("{error}: {detail}"),
            None => error.clone(),
        };
        return Err(ClientError::OAuth(message));
    }

    let token = params.token.clone().ok_or(ClientError::MissingToken)?;
    session.login_with_token(token).await?;

    Ok(safe_next(params.next.as_deref()).to_string())
}
