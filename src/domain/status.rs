//! Export job status model
//!
//! An export job moves through `queued → working → {success|error}`. The
//! progression is strictly forward; `queued` and `working` are the only
//! states the status poller keeps waiting on.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State of an asynchronous export job on geodienste.ch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStatus {
    Queued,
    Working,
    Success,
    Error,
}

impl ExportStatus {
    /// Returns the wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportStatus::Queued => "queued",
            ExportStatus::Working => "working",
            ExportStatus::Success => "success",
            ExportStatus::Error => "error",
        }
    }

    /// Whether the job has finished, successfully or not.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ExportStatus::Success | ExportStatus::Error)
    }
}

impl fmt::Display for ExportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a status-check response.
///
/// Invariant: `download_url` and `exported_at` are present exactly when the
/// status is `success`; both are absent for every other status. Payloads
/// violating this are accepted by deserialization but flagged by
/// [`StatusResponse::is_coherent`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Current job state
    pub status: ExportStatus,

    /// Human-readable detail from the service
    #[serde(default)]
    pub info: Option<String>,

    /// Location of the finished artifact, for successful jobs
    #[serde(default)]
    pub download_url: Option<String>,

    /// Completion timestamp, for successful jobs
    #[serde(default)]
    pub exported_at: Option<DateTime<Utc>>,
}

impl StatusResponse {
    /// Whether the job has finished, successfully or not.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Whether the payload satisfies the success/download-location invariant.
    pub fn is_coherent(&self) -> bool {
        match self.status {
            ExportStatus::Success => self.download_url.is_some() && self.exported_at.is_some(),
            _ => self.download_url.is_none() && self.exported_at.is_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(ExportStatus::Queued, false)]
    #[test_case(ExportStatus::Working, false)]
    #[test_case(ExportStatus::Success, true)]
    #[test_case(ExportStatus::Error, true)]
    fn test_terminal_states(status: ExportStatus, terminal: bool) {
        assert_eq!(status.is_terminal(), terminal);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ExportStatus::Working).unwrap(),
            "\"working\""
        );
        let status: ExportStatus = serde_json::from_str("\"queued\"").unwrap();
        assert_eq!(status, ExportStatus::Queued);
    }

    #[test]
    fn test_successful_payload_is_coherent() {
        let json = r#"{
            "status": "success",
            "info": "Data export successful",
            "download_url": "https://geodienste.ch/downloads/result.zip",
            "exported_at": "2026-04-01T06:12:00Z"
        }"#;

        let payload: StatusResponse = serde_json::from_str(json).unwrap();
        assert!(payload.is_terminal());
        assert!(payload.is_coherent());
    }

    #[test_case("queued")]
    #[test_case("working")]
    #[test_case("error")]
    fn test_non_success_payload_is_coherent_without_location(status: &str) {
        let json = format!(
            r#"{{"status": "{status}", "info": "detail", "download_url": null, "exported_at": null}}"#
        );

        let payload: StatusResponse = serde_json::from_str(&json).unwrap();
        assert!(payload.is_coherent());
        assert!(payload.download_url.is_none());
        assert!(payload.exported_at.is_none());
    }

    #[test]
    fn test_success_without_download_url_is_incoherent() {
        let payload = StatusResponse {
            status: ExportStatus::Success,
            info: None,
            download_url: None,
            exported_at: None,
        };
        assert!(!payload.is_coherent());
    }

    #[test]
    fn test_working_with_download_url_is_incoherent() {
        let payload = StatusResponse {
            status: ExportStatus::Working,
            info: Some("Export is being prepared".to_string()),
            download_url: Some("https://geodienste.ch/downloads/result.zip".to_string()),
            exported_at: None,
        };
        assert!(!payload.is_coherent());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = serde_json::from_str::<StatusResponse>(r#"{"status": "exploded"}"#);
        assert!(result.is_err());
    }
}
