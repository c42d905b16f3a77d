//! OAuth handoff: two halves of one flow, correlated only through the
//! provider redirect and a `next` parameter round-tripped in the URL.
//!
//! Initiation builds the provider's entry URL for a full-page navigation;
//! no client state survives that boundary. Callback resolution parses the
//! return URL and either adopts the token or reports the provider's error.

pub mod callback;
pub mod handoff;

pub use callback::{resolve_callback, CallbackParams};
pub use handoff::{authorize_url, OAuthProvider};
