//! Exportable topics and their dataset families
//!
//! A topic is one exportable geodata product for one canton. The dataset
//! families (base topics) served for agricultural land use are fixed; the
//! versioned topic names underneath them change when the service publishes
//! a new model version, so they stay plain strings.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::canton::Canton;
use crate::domain::errors::LandexError;

/// Current model version suffix for versioned topic names.
const TOPIC_VERSION_SUFFIX: &str = "_v2_0";

/// A dataset family on geodienste.ch (unversioned identifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseTopic {
    #[serde(rename = "lwb_perimeter_ln_sf")]
    PerimeterLnSf,
    #[serde(rename = "lwb_rebbaukataster")]
    Rebbaukataster,
    #[serde(rename = "lwb_perimeter_terrassenreben")]
    PerimeterTerrassenreben,
    #[serde(rename = "lwb_biodiversitaetsfoerderflaechen")]
    Biodiversitaetsfoerderflaechen,
    #[serde(rename = "lwb_bewirtschaftungseinheit")]
    Bewirtschaftungseinheit,
    #[serde(rename = "lwb_nutzungsflaechen")]
    Nutzungsflaechen,
}

impl BaseTopic {
    /// All dataset families, in the order used for catalog queries.
    pub const ALL: [BaseTopic; 6] = [
        BaseTopic::PerimeterLnSf,
        BaseTopic::Rebbaukataster,
        BaseTopic::PerimeterTerrassenreben,
        BaseTopic::Biodiversitaetsfoerderflaechen,
        BaseTopic::Bewirtschaftungseinheit,
        BaseTopic::Nutzungsflaechen,
    ];

    /// Returns the service-side identifier of the dataset family.
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseTopic::PerimeterLnSf => "lwb_perimeter_ln_sf",
            BaseTopic::Rebbaukataster => "lwb_rebbaukataster",
            BaseTopic::PerimeterTerrassenreben => "lwb_perimeter_terrassenreben",
            BaseTopic::Biodiversitaetsfoerderflaechen => "lwb_biodiversitaetsfoerderflaechen",
            BaseTopic::Bewirtschaftungseinheit => "lwb_bewirtschaftungseinheit",
            BaseTopic::Nutzungsflaechen => "lwb_nutzungsflaechen",
        }
    }

    /// Returns the versioned topic name of the current model version.
    pub fn topic_name(&self) -> String {
        format!("{}{}", self.as_str(), TOPIC_VERSION_SUFFIX)
    }
}

impl fmt::Display for BaseTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaseTopic {
    type Err = LandexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        BaseTopic::ALL
            .iter()
            .find(|base_topic| base_topic.as_str() == name)
            .copied()
            .ok_or_else(|| LandexError::Configuration(format!("Unknown base topic: {s}")))
    }
}

/// One exportable dataset: a dataset family published by one canton.
///
/// Created by deserializing a catalog response and immutable thereafter.
/// Identity is the pair of `base_topic` and `canton`; within one catalog
/// response this pair is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// Dataset family this topic belongs to
    pub base_topic: BaseTopic,

    /// Versioned dataset identifier, e.g. `lwb_nutzungsflaechen_v2_0`
    #[serde(rename = "topic")]
    pub topic_name: String,

    /// Human-readable name of the dataset
    pub topic_title: String,

    /// Publishing canton
    pub canton: Canton,

    /// Timestamp of the last known update, when the canton has published one
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Topic {
    /// Returns the identity pair of this topic.
    pub fn identity(&self) -> (BaseTopic, Canton) {
        (self.base_topic, self.canton)
    }

    /// Returns a short human-readable label for logs and reports.
    pub fn label(&self) -> String {
        format!("{} ({})", self.topic_title, self.canton)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_case::test_case;

    fn sample_topic() -> Topic {
        Topic {
            base_topic: BaseTopic::Nutzungsflaechen,
            topic_name: "lwb_nutzungsflaechen_v2_0".to_string(),
            topic_title: "Nutzungsflächen".to_string(),
            canton: Canton::BE,
            updated_at: None,
        }
    }

    #[test]
    fn test_all_contains_six_families() {
        assert_eq!(BaseTopic::ALL.len(), 6);
    }

    #[test_case(BaseTopic::PerimeterLnSf, "lwb_perimeter_ln_sf")]
    #[test_case(BaseTopic::Rebbaukataster, "lwb_rebbaukataster")]
    #[test_case(BaseTopic::Nutzungsflaechen, "lwb_nutzungsflaechen")]
    fn test_base_topic_identifier(base_topic: BaseTopic, expected: &str) {
        assert_eq!(base_topic.as_str(), expected);
    }

    #[test]
    fn test_topic_name_carries_version_suffix() {
        for base_topic in BaseTopic::ALL {
            let name = base_topic.topic_name();
            assert!(name.starts_with(base_topic.as_str()));
            assert!(name.ends_with("_v2_0"));
        }
    }

    #[test]
    fn test_parse_base_topic() {
        let parsed: BaseTopic = "lwb_bewirtschaftungseinheit".parse().unwrap();
        assert_eq!(parsed, BaseTopic::Bewirtschaftungseinheit);
        assert!("lwb_does_not_exist".parse::<BaseTopic>().is_err());
    }

    #[test]
    fn test_deserialize_catalog_entry() {
        let json = r#"{
            "base_topic": "lwb_rebbaukataster",
            "topic": "lwb_rebbaukataster_v2_0",
            "topic_title": "Rebbaukataster",
            "canton": "VS",
            "updated_at": "2026-03-12T04:30:00Z"
        }"#;

        let topic: Topic = serde_json::from_str(json).unwrap();
        assert_eq!(topic.base_topic, BaseTopic::Rebbaukataster);
        assert_eq!(topic.topic_name, "lwb_rebbaukataster_v2_0");
        assert_eq!(topic.canton, Canton::VS);
        assert!(topic.updated_at.is_some());
    }

    #[test]
    fn test_deserialize_entry_without_update_timestamp() {
        let json = r#"{
            "base_topic": "lwb_nutzungsflaechen",
            "topic": "lwb_nutzungsflaechen_v2_0",
            "topic_title": "Nutzungsflächen",
            "canton": "BE",
            "updated_at": null
        }"#;

        let topic: Topic = serde_json::from_str(json).unwrap();
        assert!(topic.updated_at.is_none());
    }

    #[test]
    fn test_identity_is_base_topic_and_canton() {
        let topic = sample_topic();
        assert_eq!(
            topic.identity(),
            (BaseTopic::Nutzungsflaechen, Canton::BE)
        );

        let mut identities = HashSet::new();
        for canton in [Canton::BE, Canton::ZH, Canton::VD] {
            let mut entry = sample_topic();
            entry.canton = canton;
            identities.insert(entry.identity());
        }
        assert_eq!(identities.len(), 3);
    }

    #[test]
    fn test_label_names_title_and_canton() {
        assert_eq!(sample_topic().label(), "Nutzungsflächen (BE)");
    }
}
