//! Shared types for the refill print pipeline.
//!
//! Data models and wire shapes used by both `refill-server` and
//! `print-agent`. DB row types derive sqlx traits behind the `db` feature
//! so the agent builds without pulling in a database driver.

pub mod api;
pub mod models;
pub mod util;

// Re-export common types
pub use api::{AckResult, HealthStatus, SubmitReceipt};
pub use models::{RefillRequest, RefillSubmission, RequestStatus, Store};
