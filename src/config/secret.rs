//! Secure credential handling using the secrecy crate
//!
//! Per-topic geodienste.ch download tokens are credentials and must not leak
//! into logs or crash reports. This module wraps them in the `secrecy` crate's
//! `Secret` container, which zeros memory on drop and redacts Debug output.
//!
//! # Example
//!
//! ```rust
//! use landex::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let token = secret_string("0ro2zrgpyfadmcx1");
//!
//! // Debug output is redacted
//! assert!(!format!("{token:?}").contains("0ro2zrgpyfadmcx1"));
//!
//! // Access requires an explicit call
//! assert_eq!(token.expose_secret().as_ref(), "0ro2zrgpyfadmcx1");
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Newtype wrapper for String that implements the required traits for Secret
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    /// Check if the secret value is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// Type alias for a secret string
///
/// This wraps a `SecretValue` in a `Secret` container that:
/// - Zeros the memory when dropped
/// - Prevents accidental logging via Debug
/// - Requires explicit `expose_secret()` to access
pub type SecretString = Secret<SecretValue>;

/// Helper function to create a SecretString
///
/// # Arguments
///
/// * `value` - The token value to protect
///
/// # Example
///
/// ```rust
/// use landex::config::secret_string;
///
/// let token = secret_string("0ro2zrgpyfadmcx1");
/// ```
#[inline]
pub fn secret_string(value: impl Into<String>) -> SecretString {
    Secret::new(SecretValue::from(value.into()))
}
