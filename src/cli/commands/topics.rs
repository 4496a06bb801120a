//! Topics command implementation
//!
//! This module implements the `topics` command for listing the topic
//! catalog published by geodienste.ch.

use crate::adapters::geodienste::GeodiensteClient;
use crate::config::load_config;
use crate::domain::Topic;
use clap::Args;

/// Arguments for the topics command
#[derive(Args, Debug)]
pub struct TopicsArgs {
    /// Print the catalog as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl TopicsArgs {
    /// Execute the topics command
    ///
    /// # Arguments
    ///
    /// * `config_path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// Returns the process exit code: 0 on success, 2 on configuration errors.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Listing available topics");

        let config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let client = match GeodiensteClient::new(&config.geodienste) {
            Ok(client) => client,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create API client");
                eprintln!("Failed to create API client: {e}");
                return Ok(1);
            }
        };

        let topics = client.request_topic_info().await;

        if topics.is_empty() {
            println!("No topics available.");
            return Ok(0);
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&topics)?);
            return Ok(0);
        }

        print_topic_table(&topics);

        Ok(0)
    }
}

/// Print the topic catalog as a fixed-width table
fn print_topic_table(topics: &[Topic]) {
    println!(
        "{:<36} {:<40} {:<8} {:<20}",
        "Family", "Title", "Canton", "Updated At"
    );
    println!("{}", "-".repeat(106));

    for topic in topics {
        let updated_at = topic
            .updated_at
            .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        println!(
            "{:<36} {:<40} {:<8} {:<20}",
            topic.base_topic.as_str(),
            topic.topic_title,
            topic.canton.as_str(),
            updated_at
        );
    }

    println!();
    println!("Found {} topic(s)", topics.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BaseTopic, Canton};

    fn sample_topics() -> Vec<Topic> {
        vec![
            Topic {
                base_topic: BaseTopic::Nutzungsflaechen,
                topic_name: "lwb_nutzungsflaechen_v2_0".to_string(),
                topic_title: "Nutzungsflächen".to_string(),
                canton: Canton::BE,
                updated_at: None,
            },
            Topic {
                base_topic: BaseTopic::Rebbaukataster,
                topic_name: "lwb_rebbaukataster_v2_0".to_string(),
                topic_title: "Rebbaukataster".to_string(),
                canton: Canton::ZH,
                updated_at: None,
            },
        ]
    }

    #[test]
    fn test_topics_args_defaults() {
        let args = TopicsArgs { json: false };
        assert!(!args.json);
    }

    #[test]
    fn test_topic_table_does_not_panic() {
        print_topic_table(&sample_topics());
    }

    #[test]
    fn test_topics_serialize_as_json() {
        let rendered = serde_json::to_string_pretty(&sample_topics()).unwrap();
        assert!(rendered.contains("lwb_nutzungsflaechen"));
        assert!(rendered.contains("\"canton\": \"BE\""));
    }
}
