//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output with configurable log levels
//! - JSON-formatted file logs with daily rotation
//! - `RUST_LOG`-style filter overrides
//!
//! # Example
//!
//! ```no_run
//! use landex::logging::init_logging;
//!
//! let _guard = init_logging("info", None).expect("Failed to initialize logging");
//!
//! // Use tracing macros for logging
//! tracing::info!("Application started");
//! tracing::error!(error = "Something went wrong", "Error occurred");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};
