//! Print Agent
//!
//! Store-side half of the refill print pipeline. One agent runs at each
//! pharmacy location, next to the label printer: it polls the refill
//! server for its store's pending requests, renders each one to ZPL,
//! sends it to the printer over raw TCP (or stdout in console mode), and
//! acks so the row leaves the queue.
//!
//! The agent holds no durable state. After a crash, a reboot, or a week
//! offline it picks up wherever the server's queue says it should.

pub mod client;
pub mod config;
pub mod error;
pub mod label;
pub mod sticker;
pub mod worker;

// Re-export common types
pub use client::{ApiClient, ClientError, ClientResult};
pub use config::AgentConfig;
pub use error::AgentError;
pub use label::LabelRenderer;
pub use worker::{LabelPrinter, PrintWorker, resolve_printer};

/// Console logging for the agent binaries.
pub fn init_logger(level: &str) {
    tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .init();
}
