//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::LandexConfig;
use super::secret::secret_string;
use crate::domain::errors::LandexError;
use crate::domain::result::Result;
use crate::domain::BaseTopic;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into LandexConfig
/// 4. Applies environment variable overrides (LANDEX_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use landex::config::load_config;
///
/// let config = load_config("landex.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<LandexConfig> {
    let path = path.as_ref();

    // Check if file exists
    if !path.exists() {
        return Err(LandexError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    // Read file contents
    let contents = fs::read_to_string(path).map_err(|e| {
        LandexError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: LandexConfig = toml::from_str(&contents)
        .map_err(|e| LandexError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    // Validate configuration
    config.validate().map_err(|e| {
        LandexError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Arguments
///
/// * `input` - String containing ${VAR} placeholders
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        // Process non-comment lines for env var substitution
        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(LandexError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the LANDEX_* prefix
///
/// Scalar settings follow the pattern LANDEX_<SECTION>_<KEY>, for example
/// LANDEX_GEODIENSTE_BASE_URL or LANDEX_EXPORT_DRY_RUN. Download tokens
/// follow LANDEX_TOKEN_<FAMILY>, for example LANDEX_TOKEN_LWB_NUTZUNGSFLAECHEN,
/// and take precedence over tokens from the TOML file.
///
/// # Arguments
///
/// * `config` - Mutable reference to the configuration to update
fn apply_env_overrides(config: &mut LandexConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("LANDEX_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // geodienste.ch overrides
    if let Ok(val) = std::env::var("LANDEX_GEODIENSTE_BASE_URL") {
        config.geodienste.base_url = val;
    }
    if let Ok(val) = std::env::var("LANDEX_GEODIENSTE_TIMEOUT_SECONDS") {
        if let Ok(seconds) = val.parse() {
            config.geodienste.timeout_seconds = seconds;
        }
    }
    if let Ok(val) = std::env::var("LANDEX_GEODIENSTE_RETRY_INTERVAL_SECONDS") {
        if let Ok(seconds) = val.parse() {
            config.geodienste.retry_interval_seconds = seconds;
        }
    }

    // Export overrides
    if let Ok(val) = std::env::var("LANDEX_EXPORT_DESTINATION_DIR") {
        config.export.destination_dir = val;
    }
    if let Ok(val) = std::env::var("LANDEX_EXPORT_PARALLEL_TOPICS") {
        if let Ok(parallel) = val.parse() {
            config.export.parallel_topics = parallel;
        }
    }
    if let Ok(val) = std::env::var("LANDEX_EXPORT_DRY_RUN") {
        config.export.dry_run = val.parse().unwrap_or(false);
    }

    // Per-topic token overrides
    for base_topic in BaseTopic::ALL {
        let var_name = format!("LANDEX_TOKEN_{}", base_topic.as_str().to_ascii_uppercase());
        if let Ok(val) = std::env::var(&var_name) {
            config
                .geodienste
                .tokens
                .insert(base_topic.as_str().to_string(), secret_string(val));
        }
    }
}
