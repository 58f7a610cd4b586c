//! Refill Server
//!
//! Server side of the pharmacy refill print pipeline. Patients submit
//! refill requests from a public form; each store runs a print agent that
//! polls its partition of the queue, prints a label, and acks. The queue
//! lives in SQLite and survives restarts; agents hold no durable state.
//!
//! # Module structure
//!
//! ```text
//! refill-server/src/
//! ├── core/           # config, shared state, HTTP server lifecycle
//! ├── api/            # routes and handlers (refills, stores, health)
//! ├── db/             # SQLite pool + repository functions
//! ├── directory.rs    # store id -> display info / printer address
//! └── utils/          # errors, logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod directory;
pub mod utils;

// Re-export common types
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use directory::StoreDirectory;
pub use utils::{AppError, AppResult, init_logger, init_logger_with_file};

/// Load `.env`, read config, initialize logging.
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
  ____       __ _ _ _
 |  _ \ ___ / _(_) | |
 | |_) / _ \ |_| | | |
 |  _ <  __/  _| | | |
 |_| \_\___|_| |_|_|_|  server v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
