//! Core business logic for Landex.
//!
//! This module contains the core business logic and orchestration for
//! geodienste.ch exports.
//!
//! # Modules
//!
//! - [`export`] - Export orchestration, topic selection, and reporting
//! - [`download`] - Artifact download and checksumming
//!
//! # Export Workflow
//!
//! The typical export workflow:
//!
//! 1. **Fetch Catalog**: Read the topic catalog from geodienste.ch
//! 2. **Select Topics**: Apply the configured family and canton filters
//! 3. **Start Jobs**: Trigger an export job per topic, waiting out conflicts
//! 4. **Poll Status**: Wait until each job reaches a terminal state
//! 5. **Download**: Fetch the produced artifacts to the destination directory
//! 6. **Report**: Generate an export summary
//!
//! # Example
//!
//! ```rust,no_run
//! use landex::config::load_config;
//! use landex::core::export::ExportCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration
//! let config = load_config("landex.toml")?;
//!
//! // Create shutdown signal
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!
//! // Create export coordinator
//! let coordinator = ExportCoordinator::new(config, shutdown_rx)?;
//!
//! // Execute export
//! let summary = coordinator.execute_export().await?;
//!
//! println!("Topics: {}", summary.total_topics);
//! println!("Successful: {}", summary.successful_exports);
//! println!("Failed: {}", summary.failed_exports);
//! # Ok(())
//! # }
//! ```

pub mod download;
pub mod export;
