//! Configuration schema types
//!
//! This module defines the configuration structure for Landex as it maps to
//! the TOML file. Every section carries defaults so that a minimal file (or
//! none at all, combined with environment overrides) still produces a usable
//! configuration.

use crate::config::SecretString;
use crate::domain::{BaseTopic, Canton};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Main Landex configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LandexConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// geodienste.ch API configuration
    #[serde(default)]
    pub geodienste: GeodiensteConfig,

    /// Export selection and destination settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl LandexConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.geodienste.validate()?;
        self.export.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid application.log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// geodienste.ch API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeodiensteConfig {
    /// Base URL of the geodienste.ch API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Delay between retries of the export and status calls, in seconds
    #[serde(default = "default_retry_interval_seconds")]
    pub retry_interval_seconds: u64,

    /// Per-topic download tokens, keyed by topic family name
    /// (e.g. "lwb_nutzungsflaechen")
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub tokens: HashMap<String, SecretString>,
}

impl GeodiensteConfig {
    /// Returns the download token configured for a topic family, if any
    pub fn token_for(&self, base_topic: BaseTopic) -> Option<&SecretString> {
        self.tokens.get(base_topic.as_str())
    }

    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.base_url.is_empty() {
            return Err("geodienste.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("geodienste.base_url must start with http:// or https://".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("geodienste.timeout_seconds must be > 0".to_string());
        }

        if self.retry_interval_seconds == 0 {
            return Err("geodienste.retry_interval_seconds must be > 0".to_string());
        }

        for (key, token) in &self.tokens {
            key.parse::<BaseTopic>().map_err(|_| {
                format!(
                    "Unknown topic family '{key}' in geodienste.tokens. Must be one of: {}",
                    BaseTopic::ALL
                        .iter()
                        .map(|base_topic| base_topic.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })?;

            if token.expose_secret().is_empty() {
                return Err(format!("geodienste.tokens.{key} cannot be empty"));
            }
        }

        Ok(())
    }
}

impl Default for GeodiensteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            retry_interval_seconds: default_retry_interval_seconds(),
            tokens: HashMap::new(),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Topic families to export (empty = all families with a configured token)
    #[serde(default)]
    pub base_topics: Vec<String>,

    /// Cantons to export (empty = all cantons)
    #[serde(default)]
    pub cantons: Vec<String>,

    /// Directory that downloaded export artifacts are written to
    #[serde(default = "default_destination_dir")]
    pub destination_dir: String,

    /// Number of topics exported concurrently
    #[serde(default = "default_parallel_topics")]
    pub parallel_topics: usize,

    /// Dry run mode - list what would be exported without calling the export API
    #[serde(default)]
    pub dry_run: bool,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        for name in &self.base_topics {
            name.parse::<BaseTopic>()
                .map_err(|_| format!("Unknown topic family '{name}' in export.base_topics"))?;
        }

        for code in &self.cantons {
            code.parse::<Canton>()
                .map_err(|_| format!("Unknown canton '{code}' in export.cantons"))?;
        }

        if self.destination_dir.is_empty() {
            return Err("export.destination_dir cannot be empty".to_string());
        }

        if self.parallel_topics == 0 || self.parallel_topics > 16 {
            return Err(format!(
                "export.parallel_topics must be between 1 and 16, got {}",
                self.parallel_topics
            ));
        }

        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_topics: vec![],
            cantons: vec![],
            destination_dir: default_destination_dir(),
            parallel_topics: default_parallel_topics(),
            dry_run: false,
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "https://geodienste.ch".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_retry_interval_seconds() -> u64 {
    60
}

fn default_destination_dir() -> String {
    "./exports".to_string()
}

fn default_parallel_topics() -> usize {
    4
}
