//! Wire documents exchanged with geodienste.ch
//!
//! The download API answers with small JSON documents; only the catalog
//! document carries domain types. Status payloads live in
//! [`crate::domain::status`] because the pipeline consumes them directly.

use serde::Deserialize;

use crate::domain::Topic;

/// Error text the service uses to reject a start while an export is running.
///
/// The conflict is recognized by this exact message; any other error body is
/// treated as terminal.
pub const PENDING_EXPORT_MESSAGE: &str =
    "Cannot start data export because there is another data export pending";

/// Catalog document returned by the info endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TopicInfoDocument {
    /// Every topic currently offered for the requested selection
    pub services: Vec<Topic>,
}

/// Body of a successful start-export response.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportStartedDocument {
    /// Human-readable confirmation from the service
    pub info: String,
}

/// Error body of a rejected start-export request.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportErrorDocument {
    /// Error message from the service
    pub error: String,
}

impl ExportErrorDocument {
    /// Whether this error is the recoverable "another export pending" rejection.
    pub fn is_pending_export(&self) -> bool {
        self.error == PENDING_EXPORT_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BaseTopic, Canton};

    #[test]
    fn test_catalog_document_deserializes() {
        let json = r#"{
            "services": [
                {
                    "base_topic": "lwb_perimeter_ln_sf",
                    "topic": "lwb_perimeter_ln_sf_v2_0",
                    "topic_title": "Perimeter LN und Sömmerungsflächen",
                    "canton": "GR",
                    "updated_at": null
                }
            ]
        }"#;

        let document: TopicInfoDocument = serde_json::from_str(json).unwrap();
        assert_eq!(document.services.len(), 1);
        assert_eq!(document.services[0].base_topic, BaseTopic::PerimeterLnSf);
        assert_eq!(document.services[0].canton, Canton::GR);
    }

    #[test]
    fn test_pending_export_is_recognized_exactly() {
        let pending = ExportErrorDocument {
            error: PENDING_EXPORT_MESSAGE.to_string(),
        };
        assert!(pending.is_pending_export());

        let other = ExportErrorDocument {
            error: "Data export not possible for this topic".to_string(),
        };
        assert!(!other.is_pending_export());
    }

    #[test]
    fn test_started_document_deserializes() {
        let document: ExportStartedDocument =
            serde_json::from_str(r#"{"info": "Data export successfully started."}"#).unwrap();
        assert_eq!(document.info, "Data export successfully started.");
    }
}
