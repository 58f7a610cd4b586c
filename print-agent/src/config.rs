//! Agent Configuration
//!
//! All settings come from the environment (or `.env`).
//!
//! | Variable             | Default                 | Description                        |
//! |----------------------|-------------------------|------------------------------------|
//! | `STORE_ID`           | required                | Store this agent prints for        |
//! | `SERVER_URL`         | `http://127.0.0.1:8080` | Refill server base URL             |
//! | `PRINTER_HOST`       | unset                   | Printer host/IP, wins over the directory |
//! | `PRINTER_PORT`       | `9100`                  | Raw ZPL port                       |
//! | `POLL_INTERVAL_SECS` | `5`                     | Seconds between polls              |
//! | `AGENT_TZ`           | `America/Chicago`       | Timezone for label timestamps      |
//! | `LOG_LEVEL`          | `info`                  | trace / debug / info / warn / error |
//!
//! With `PRINTER_HOST` unset the agent asks the server's store directory
//! for this store's printer; if that yields nothing either, it runs in
//! console mode (ZPL to stdout, still acked).

use std::time::Duration;

use chrono_tz::Tz;
use shared::models::DEFAULT_PRINTER_PORT;

use crate::error::AgentError;

#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub store_id: i64,
    pub server_url: String,
    pub printer_host: Option<String>,
    pub printer_port: u16,
    pub poll_interval: Duration,
    pub timezone: Tz,
    pub log_level: String,
}

impl AgentConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AgentError> {
        let store_id = std::env::var("STORE_ID")
            .ok()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|id| *id > 0)
            .ok_or_else(|| {
                AgentError::Config("STORE_ID must be set to this store's numeric id".to_string())
            })?;

        let printer_host = std::env::var("PRINTER_HOST")
            .ok()
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty());

        Ok(Self {
            store_id,
            server_url: std::env::var("SERVER_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string()),
            printer_host,
            printer_port: std::env::var("PRINTER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PRINTER_PORT),
            poll_interval: Duration::from_secs(
                std::env::var("POLL_INTERVAL_SECS")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(5),
            ),
            timezone: std::env::var("AGENT_TZ")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(chrono_tz::America::Chicago),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
