//! Data models
//!
//! Shared between refill-server and print-agent (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod refill_request;
pub mod store;

// Re-exports
pub use refill_request::*;
pub use store::*;
