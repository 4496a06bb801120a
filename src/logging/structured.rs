//! Structured logging setup using tracing
//!
//! This module provides structured logging with configurable log levels,
//! console output, and optional JSON file logging with daily rotation.
//!
//! # Example
//!
//! ```no_run
//! use landex::logging::init_logging;
//!
//! let _guard = init_logging("info", None).expect("Failed to initialize logging");
//! ```

use crate::domain::{LandexError, Result};
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Guard that must be kept alive for the duration of the program
/// to ensure logs are flushed properly
#[derive(Debug)]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    /// Create a new logging guard
    fn new(file_guard: Option<WorkerGuard>) -> Self {
        Self {
            _file_guard: file_guard,
        }
    }
}

/// Initialize the logging system
///
/// This function sets up structured logging with:
/// - Console output with configurable log levels
/// - Optional JSON file logging with daily rotation when `log_dir` is given
///
/// The `RUST_LOG` environment variable, when set, takes precedence over
/// `log_level_str`.
///
/// # Arguments
///
/// * `log_level_str` - Log level as a string (trace, debug, info, warn, error)
/// * `log_dir` - Directory for the rotated JSON log file, if file logging is
///   wanted
///
/// # Returns
///
/// A `LoggingGuard` that must be kept alive for the duration of the program
///
/// # Example
///
/// ```no_run
/// use landex::logging::init_logging;
/// use std::path::Path;
///
/// let _guard = init_logging("debug", Some(Path::new("./logs")))
///     .expect("Failed to initialize logging");
/// // Keep _guard alive for the duration of the program
/// ```
pub fn init_logging(log_level_str: &str, log_dir: Option<&Path>) -> Result<LoggingGuard> {
    // Parse log level from string
    let log_level = parse_log_level(log_level_str)?;

    // Build the subscriber with layers
    let mut layers = Vec::new();

    // Console layer (always enabled)
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(build_filter(log_level));

    layers.push(console_layer.boxed());

    // File logging layer (if a log directory was given)
    let file_guard = if let Some(dir) = log_dir {
        // Create the log directory if it doesn't exist
        std::fs::create_dir_all(dir).map_err(|e| {
            LandexError::Configuration(format!(
                "Failed to create log directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, "landex.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(non_blocking)
            .with_filter(build_filter(log_level));

        layers.push(file_layer.boxed());
        Some(guard)
    } else {
        None
    };

    // Initialize the subscriber
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| {
            LandexError::Configuration(format!("Failed to initialize logging: {e}"))
        })?;

    tracing::info!(
        log_level = %log_level,
        file_logging = log_dir.is_some(),
        "Logging initialized"
    );

    Ok(LoggingGuard::new(file_guard))
}

/// Build the environment filter for one layer
///
/// EnvFilter is not cloneable, so each layer builds its own.
fn build_filter(log_level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("landex={}", log_level)))
}

/// Parse log level from string
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(LandexError::Configuration(format!(
            "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
            level_str
        ))),
    }
}
