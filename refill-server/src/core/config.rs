//! Server Configuration
//!
//! All settings come from the environment (or `.env` in development).
//!
//! | Variable          | Default       | Description                       |
//! |-------------------|---------------|-----------------------------------|
//! | `HTTP_PORT`       | `8080`        | Listen port                       |
//! | `DB_PATH`         | `refills.db`  | SQLite database file              |
//! | `STORE_DIRECTORY` | `stores.json` | Store directory JSON file         |
//! | `LOG_LEVEL`       | `info`        | trace / debug / info / warn / error |
//! | `LOG_DIR`         | unset         | Daily-rotated log files when set  |

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub db_path: String,
    pub store_directory: String,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            db_path: std::env::var("DB_PATH").unwrap_or_else(|_| "refills.db".to_string()),
            store_directory: std::env::var("STORE_DIRECTORY")
                .unwrap_or_else(|_| "stores.json".to_string()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
