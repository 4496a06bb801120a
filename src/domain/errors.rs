//! Domain error types
//!
//! This module defines the error hierarchy for landex. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main landex error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum LandexError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// geodienste.ch API errors
    #[error("geodienste.ch error: {0}")]
    Geodienste(#[from] GeodiensteError),

    /// Artifact download errors
    #[error("Download error: {0}")]
    Download(#[from] DownloadError),

    /// Export pipeline errors
    #[error("Export error: {0}")]
    Export(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// geodienste.ch-specific errors
///
/// Errors that occur when talking to the geodienste.ch download API.
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum GeodiensteError {
    /// Failed to reach the service at all
    #[error("Failed to connect to geodienste.ch: {0}")]
    ConnectionFailed(String),

    /// The service answered, but the body could not be interpreted
    #[error("Invalid response from geodienste.ch: {0}")]
    InvalidResponse(String),

    /// The service answered with a status the exchange does not expect
    #[error("Unexpected response status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

/// Artifact download errors
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The download URL from the status payload is not a valid URL
    #[error("Invalid download URL: {0}")]
    InvalidUrl(String),

    /// Failed to reach the download host
    #[error("Failed to download artifact: {0}")]
    ConnectionFailed(String),

    /// The download host answered with a non-success status
    #[error("Download failed with HTTP status {0}")]
    HttpStatus(u16),

    /// Writing the artifact to disk failed
    #[error("Failed to write artifact: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for LandexError {
    fn from(err: std::io::Error) -> Self {
        LandexError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for LandexError {
    fn from(err: serde_json::Error) -> Self {
        LandexError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for LandexError {
    fn from(err: toml::de::Error) -> Self {
        LandexError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landex_error_display() {
        let err = LandexError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_geodienste_error_conversion() {
        let api_err = GeodiensteError::ConnectionFailed("Network error".to_string());
        let err: LandexError = api_err.into();
        assert!(matches!(err, LandexError::Geodienste(_)));
    }

    #[test]
    fn test_download_error_conversion() {
        let dl_err = DownloadError::HttpStatus(503);
        let err: LandexError = dl_err.into();
        assert!(matches!(err, LandexError::Download(_)));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_unexpected_status_display() {
        let err = GeodiensteError::UnexpectedStatus {
            status: 500,
            body: "Internal Server Error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected response status 500: Internal Server Error"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: LandexError = io_err.into();
        assert!(matches!(err, LandexError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: LandexError = json_err.into();
        assert!(matches!(err, LandexError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: LandexError = toml_err.into();
        assert!(matches!(err, LandexError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_landex_error_implements_std_error() {
        let err = LandexError::Export("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_geodienste_error_implements_std_error() {
        let err = GeodiensteError::ConnectionFailed("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
