//! Result type alias for landex

use super::errors::LandexError;

/// Result type alias for landex operations
///
/// This is a convenience type alias that uses `LandexError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use landex::domain::result::Result;
/// use landex::domain::errors::LandexError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(LandexError::Configuration("missing token".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, LandexError>;
