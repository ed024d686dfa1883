//! # Tracing Setup
//!
//! Installs the global `tracing` subscriber used by binaries: an `EnvFilter`,
//! a coloured console layer and a JSON layer on a daily rolling file.

use std::env;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::errors::{ElexError, ElexResult};

/// Reads `RUST_LOG` (default `info`) and `LOG_DIR` (default `logs`) and
/// installs the subscriber for `app_name`.
///
/// Keep the returned guard alive for as long as the process logs; dropping it
/// flushes and stops the file writer.
pub fn setup_logging(app_name: &str) -> ElexResult<WorkerGuard> {
    let log_level: String = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_dir: String = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());
    setup_logging_in(Path::new(&log_dir), app_name, &log_level)
}

/// Same as [`setup_logging`] with explicit directory and level.
pub fn setup_logging_in(log_dir: &Path, app_name: &str, log_level: &str) -> ElexResult<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = rolling::daily(log_dir, app_name);
    let (non_blocking_appender, guard) = non_blocking(file_appender);

    let console_layer = fmt::layer().with_target(true).with_ansi(true);

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking_appender)
        .json();

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .map_err(|e| ElexError::Logging(e.to_string()))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ElexError::Logging(e.to_string()))?;

    tracing::info!("Logging initialized with level: {}", log_level);
    Ok(guard)
}
