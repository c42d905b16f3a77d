pub mod logger;
pub mod safe_next;

pub use safe_next::safe_next;
