//! Logging Infrastructure
//!
//! Structured logging setup for both development and production environments.
//! `RUST_LOG` takes precedence over the configured level when it is set.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Log file prefix inside `LOG_DIR`
const LOG_FILE_PREFIX: &str = "reservation-server";

/// Initialize the logger with defaults (info, plain text, stdout)
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger with optional JSON formatting and file output
///
/// A `log_dir` that does not exist is ignored and logs go to stdout.
/// Calling this more than once is a no-op.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir
        && Path::new(dir).is_dir()
    {
        let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
        let subscriber = subscriber.with_writer(file_appender).with_ansi(false);
        let _ = if json {
            subscriber.json().try_init()
        } else {
            subscriber.try_init()
        };
        return;
    }

    let _ = if json {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    };
}

/// Read logger settings from the environment and initialize it
///
/// | 环境变量 | 默认值 |
/// |----------|--------|
/// | LOG_LEVEL | info |
/// | LOG_JSON | false |
/// | LOG_DIR | (stdout) |
pub fn init_logger_from_env() {
    let level = std::env::var("LOG_LEVEL").ok();
    let json = std::env::var("LOG_JSON")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false);
    let dir = std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty());
    init_logger_with_file(level.as_deref(), json, dir.as_deref());
}
