pub mod guard;
pub mod session;

// Re-export so we can do "use crate::session::{Session, SessionState};"
pub use guard::{evaluate, login_url, register_url, GuardDecision};
pub use session::{Session, SessionState};
