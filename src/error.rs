use http::StatusCode;
use serde_json::Value;

/// Machine-readable error codes returned by the platform in its
/// `{message, code}` error envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    Unauthorized,
    Forbidden,
    Validation,
    NotFound,
    Duplicate,
    /// A code we don't recognize; kept verbatim so callers can still match on it.
    Other(String),
}

impl ErrorCode {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "UNAUTHORIZED" => ErrorCode::Unauthorized,
            "FORBIDDEN" => ErrorCode::Forbidden,
            "VALIDATION_ERROR" => ErrorCode::Validation,
            "NOT_FOUND" => ErrorCode::NotFound,
            "DUPLICATE" => ErrorCode::Duplicate,
            other => ErrorCode::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::Validation => "VALIDATION_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Duplicate => "DUPLICATE",
            ErrorCode::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All the ways a client operation can fail.
///
/// Every variant degrades gracefully: nothing here is fatal to the process,
/// and `humanize` always produces something fit to show a user.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced an HTTP response (DNS, connect, TLS, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The platform answered outside the 2xx range. `message` falls back to
    /// `"HTTP <status>"` when the body carried none.
    #[error("{message}")]
    Api {
        status: StatusCode,
        code: Option<ErrorCode>,
        message: String,
    },

    /// A 2xx response that didn't match the expected payload shape.
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    /// The token store could not be read or written.
    #[error("token store error: {0}")]
    Store(String),

    /// An OAuth callback URL carried neither a token nor an error.
    #[error("Missing token in callback URL.")]
    MissingToken,

    /// The identity provider reported an error on callback.
    #[error("{0}")]
    OAuth(String),
}

impl ClientError {
    /// Build an error from a non-2xx response and its (possibly empty) JSON body.
    pub(crate) fn from_envelope(status: StatusCode, body: &Value) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        let code = body.get("code").and_then(Value::as_str).map(ErrorCode::parse);
        ClientError::Api {
            status,
            code,
            message,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&ErrorCode> {
        match self {
            ClientError::Api { code, .. } => code.as_ref(),
            _ => None,
        }
    }

    /// Map the error to a fixed user-facing message. Recognized platform
    /// codes get a canned string; everything else falls back to the raw
    /// message or a generic one.
    pub fn humanize(&self) -> String {
        match self {
            ClientError::Api { code, message, .. } => match code {
                Some(ErrorCode::Unauthorized) => "Please login first.".to_string(),
                Some(ErrorCode::Forbidden) => "You don't have permission to do that.".to_string(),
                Some(ErrorCode::Validation) => "Please check your input.".to_string(),
                Some(ErrorCode::NotFound) => "Not found.".to_string(),
                Some(ErrorCode::Duplicate) => "Already exists.".to_string(),
                Some(ErrorCode::Other(_)) | None => {
                    if message.is_empty() {
                        "Server error.".to_string()
                    } else {
                        message.clone()
                    }
                }
            },
            ClientError::Transport(_) => "Network error. Please try again.".to_string(),
            ClientError::Decode(_) => "Server error.".to_string(),
            ClientError::Store(_) => "Could not access the saved session.".to_string(),
            ClientError::MissingToken => "Missing token in callback URL.".to_string(),
            ClientError::OAuth(message) => message.clone(),
        }
    }
}
