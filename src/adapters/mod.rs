//! External system integrations for landex.
//!
//! This module provides adapters for integrating with external systems:
//!
//! - [`geodienste`] - geodienste.ch download API (catalog, export jobs, status)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies
//! and enable testing with mock implementations. The export coordinator
//! depends on the [`geodienste::GeodiensteApi`] trait, never on the
//! concrete HTTP client.
//!
//! ```rust,no_run
//! use landex::adapters::geodienste::GeodiensteClient;
//! use landex::config::GeodiensteConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeodiensteConfig {
//!     base_url: "https://geodienste.ch".to_string(),
//!     timeout_seconds: 60,
//!     retry_interval_seconds: 60,
//!     tokens: Default::default(),
//! };
//!
//! let client = GeodiensteClient::new(&config)?;
//! let topics = client.request_topic_info().await;
//! # Ok(())
//! # }
//! ```

pub mod geodienste;
