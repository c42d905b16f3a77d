use super::SessionState;

/// What a protected view should do, given the session state and the
/// location (path + query) being visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Resolution hasn't settled: show a neutral placeholder. Redirecting
    /// now would bounce a returning visitor whose token is still being
    /// checked; rendering now would flash protected content.
    Pending,
    /// Anonymous: send the visitor to login, carrying the intended
    /// destination so they come back after authenticating.
    RedirectToLogin { to: String },
    /// Authenticated: render the protected content.
    Allow,
}

impl GuardDecision {
    pub fn is_allow(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

/// Gate a protected view. Pure: no state of its own, no side effects.
pub fn evaluate(state: &SessionState, location: &str) -> GuardDecision {
    match state {
        SessionState::Unresolved | SessionState::Resolving => GuardDecision::Pending,
        SessionState::Authenticated(_) => GuardDecision::Allow,
        SessionState::Anonymous => GuardDecision::RedirectToLogin {
            to: login_url(location),
        },
    }
}

/// `/login?next=<location>`, with the location percent-encoded. The value
/// is sanitized when it is consumed, not here.
pub fn login_url(location: &str) -> String {
    format!("/login?next={}", urlencoding::encode(location))
}

/// `/register?next=<location>`, for the matching sign-up link.
pub fn register_url(location: &str) -> String {
    format!("/register?next={}", urlencoding::encode(location))
}
