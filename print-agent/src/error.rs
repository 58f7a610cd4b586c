//! Agent error types

use rx_printer::PrintError;

/// Startup errors: bad configuration or an unusable printer address.
///
/// Steady-state poll and print failures never land here; the worker logs
/// them and retries on the next cycle.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Print(#[from] PrintError),
}
