//! HTTP response envelope for geodienste.ch exchanges
//!
//! Every exchange the client drives finishes with an [`ApiResponse`]: the
//! status code plus the already-read body text. Callers branch on one
//! uniform shape instead of a separate retry-specific error type.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::domain::GeodiensteError;

/// Terminal HTTP response of one exchange with geodienste.ch.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    /// Creates a response from its parts.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Reads status and body out of a raw HTTP response.
    ///
    /// # Errors
    ///
    /// Returns [`GeodiensteError::ConnectionFailed`] when the body cannot be
    /// read off the wire.
    pub async fn read(response: reqwest::Response) -> Result<Self, GeodiensteError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GeodiensteError::ConnectionFailed(e.to_string()))?;
        Ok(Self { status, body })
    }

    /// Returns the HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the raw body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GeodiensteError::InvalidResponse`] when the body is not the
    /// expected JSON document.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, GeodiensteError> {
        serde_json::from_str(&self.body).map_err(|e| {
            GeodiensteError::InvalidResponse(format!("Failed to parse response body: {e}"))
        })
    }
}
