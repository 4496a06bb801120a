//! Configuration management for Landex.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Landex uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`LANDEX_*` prefix)
//! - Default values for optional settings
//! - Comprehensive validation
//! - Type-safe configuration structs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use landex::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from file
//! let config = load_config("landex.toml")?;
//!
//! // Access configuration sections
//! println!("API URL: {}", config.geodienste.base_url);
//! println!("Destination: {}", config.export.destination_dir);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! The configuration is organized into sections:
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`GeodiensteConfig`] - geodienste.ch API endpoint, timeouts and tokens
//! - [`ExportConfig`] - Topic selection, destination and concurrency
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [geodienste]
//! base_url = "https://geodienste.ch"
//! retry_interval_seconds = 60
//!
//! [geodienste.tokens]
//! lwb_nutzungsflaechen = "${LWB_NUTZUNGSFLAECHEN_TOKEN}"
//!
//! [export]
//! cantons = ["BE", "ZH"]
//! destination_dir = "./exports"
//! ```
//!
//! # Environment Variables
//!
//! Use `${VAR_NAME}` syntax for environment variable substitution, or the
//! `LANDEX_*` override variables:
//!
//! ```bash
//! export LANDEX_TOKEN_LWB_NUTZUNGSFLAECHEN="secret-token"
//! export LANDEX_EXPORT_DRY_RUN="true"
//! ```
//!
//! # Validation
//!
//! Configuration is validated on load:
//!
//! ```rust,no_run
//! use landex::config::load_config;
//!
//! # fn example() {
//! match load_config("landex.toml") {
//!     Ok(config) => println!("Configuration valid"),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApplicationConfig, ExportConfig, GeodiensteConfig, LandexConfig};
pub use secret::{secret_string, SecretString, SecretValue};
