//! Error types for the printer library

use thiserror::Error;

/// Label printer transport errors
///
/// All of these are transient from the caller's point of view: the label
/// bytes are still in hand and the send can be retried.
#[derive(Debug, Error)]
pub enum PrintError {
    /// TCP connect to the printer was refused or failed
    #[error("Cannot reach printer at {0}")]
    Connection(String),

    /// Write or flush failed mid-job
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Printer did not accept the connection in time
    #[error("Printer timeout: {0}")]
    Timeout(String),

    /// Bad host or address string
    #[error("Invalid printer config: {0}")]
    InvalidConfig(String),
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;
