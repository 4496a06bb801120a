// Landex - geodienste.ch agricultural geodata export tool
// Copyright (c) 2026 Landex Contributors
// Licensed under the MIT License

//! # Landex - geodienste.ch Export Tool
//!
//! Landex exports agricultural geodata (the LWB datasets) from the Swiss
//! geodata portal [geodienste.ch](https://geodienste.ch) to the local
//! filesystem. It drives the portal's asynchronous export workflow: request
//! the topic catalog, start one export job per topic, poll the job until it
//! finishes, then download the resulting archive.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Fetching** the topic catalog of exportable datasets per canton
//! - **Starting** server-side export jobs with per-family download tokens
//! - **Polling** job status until the export succeeds or fails
//! - **Downloading** finished export archives with SHA-256 checksums
//!
//! ## Architecture
//!
//! Landex follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (export coordination, artifact download)
//! - [`adapters`] - External integrations (geodienste.ch API)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use landex::config::load_config;
//! use landex::core::export::ExportCoordinator;
//! use tokio::sync::watch;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("landex.toml")?;
//!
//!     // Create export coordinator
//!     let (_shutdown_tx, shutdown_rx) = watch::channel(false);
//!     let coordinator = ExportCoordinator::new(config, shutdown_rx)?;
//!
//!     // Execute export
//!     let summary = coordinator.execute_export().await?;
//!
//!     println!("Exported {} topics", summary.successful_exports);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! ### Pending-Export Retries
//!
//! geodienste.ch allows one export job per topic at a time. When a start
//! request is rejected because another export is still pending, Landex waits
//! and retries up to ten times before giving up. The wait between attempts
//! is a fixed interval taken from the configuration:
//!
//! ```rust,no_run
//! use landex::adapters::geodienste::WaitStrategy;
//! use std::time::Duration;
//!
//! let strategy = WaitStrategy::fixed(Duration::from_secs(60));
//! ```
//!
//! The same budget applies while polling a started job: `queued` and
//! `working` responses are retried, any other response ends the poll.
//!
//! ### Secret Handling
//!
//! Download tokens are held as [`config::SecretString`] values. They never
//! appear in `Debug` output or logs and are zeroized on drop:
//!
//! ```rust
//! use landex::config::secret_string;
//!
//! let token = secret_string("4ebec5f3-special-token");
//! assert!(!format!("{token:?}").contains("special"));
//! ```
//!
//! ## Error Handling
//!
//! Landex uses the [`domain::LandexError`] type for all errors:
//!
//! ```rust,no_run
//! use landex::domain::LandexError;
//!
//! fn example() -> Result<(), LandexError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = landex::config::load_config("landex.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Landex uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting export");
//! warn!(topic = "lwb_nutzungsflaechen", "No download token configured");
//! error!(error = "connection refused", "Export failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
