use reqwest::Url;

use crate::error::ClientError;
use crate::utils::safe_next;

/// Identity providers the platform can hand off to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    GitHub,
}

impl OAuthProvider {
    pub const ALL: [OAuthProvider; 2] = [OAuthProvider::Google, OAuthProvider::GitHub];

    /// Fixed entry path on the platform API for this provider.
    pub fn path(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "/api/auth/oauth/google",
            OAuthProvider::GitHub => "/api/auth/oauth/github",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "Google",
            OAuthProvider::GitHub => "GitHub",
        }
    }
}

impl std::fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OAuthProvider::Google => f.write_str("google"),
            OAuthProvider::GitHub => f.write_str("github"),
        }
    }
}

/// Build the provider entry URL for a full-page navigation.
///
/// The `next` value is sanitized before it is attached, so whatever comes
/// back on the callback can only ever point inside the app.
pub fn authorize_url(
    base_url: &str,
    provider: OAuthProvider,
    next: Option<&str>,
) -> Result<Url, ClientError> {
    let mut url = Url::parse(&format!(
        "{}{}",
        base_url.trim_end_matches('/'),
        provider.path()
    ))
    .map_err(|e| ClientError::OAuth(format!("invalid API base URL: {e}")))?;

    url.query_pairs_mut().append_pair("next", safe_next(next));
    Ok(url)
}
