//! Logging Infrastructure
//!
//! Console logging by default; pass a log directory to also write
//! daily-rotated files (used on store hardware that nobody watches).

use std::path::Path;

/// Initialize console-only logging
pub fn init_logger(level: &str) {
    init_logger_with_file(level, None);
}

/// Initialize logging with optional daily file rotation
///
/// Falls back to console-only when the directory does not exist.
pub fn init_logger_with_file(level: &str, log_dir: Option<&str>) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let path = Path::new(dir);
        if path.exists() {
            let file_appender = tracing_appender::rolling::daily(path, "refill-server.log");
            subscriber.with_writer(file_appender).init();
            return;
        }
        eprintln!("Log directory {dir} does not exist, logging to console only");
    }

    subscriber.init();
}
