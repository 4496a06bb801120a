//! Export coordinator - main orchestrator for the export process
//!
//! This module coordinates the export workflow: select topics from the
//! catalog, start an export job per topic, wait for the job to finish and
//! download the produced artifact. Topics are processed concurrently up to
//! the configured limit.

use crate::adapters::geodienste::models::ExportErrorDocument;
use crate::adapters::geodienste::{ApiResponse, GeodiensteApi, GeodiensteClient};
use crate::config::{LandexConfig, SecretString};
use crate::core::download::download_export;
use crate::core::export::summary::{ExportError, ExportErrorType, ExportSummary};
use crate::domain::{BaseTopic, Canton, ExportStatus, Result, StatusResponse, Topic};
use futures::stream::{self, StreamExt};
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

/// Outcome of exporting one topic
enum TopicOutcome {
    /// The artifact was downloaded
    Exported(crate::core::download::DownloadedArtifact),

    /// The topic failed
    Failed(ExportError),

    /// A shutdown signal arrived before the topic was started
    Interrupted,
}

/// Export coordinator
pub struct ExportCoordinator {
    config: LandexConfig,
    api: Arc<dyn GeodiensteApi>,
    shutdown_signal: watch::Receiver<bool>,
}

impl ExportCoordinator {
    /// Create a new export coordinator backed by the live geodienste.ch API
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: LandexConfig, shutdown_signal: watch::Receiver<bool>) -> Result<Self> {
        let client = GeodiensteClient::new(&config.geodienste)?;
        Ok(Self {
            config,
            api: Arc::new(client),
            shutdown_signal,
        })
    }

    /// Create a coordinator with a caller-supplied API implementation
    pub fn with_api(
        config: LandexConfig,
        api: Arc<dyn GeodiensteApi>,
        shutdown_signal: watch::Receiver<bool>,
    ) -> Self {
        Self {
            config,
            api,
            shutdown_signal,
        }
    }

    /// Execute the export run
    ///
    /// This is the main entry point for the export process. It:
    /// 1. Fetches the topic catalog
    /// 2. Selects topics by the configured family and canton filters
    /// 3. For each selected topic (concurrently):
    ///    - Starts the export job
    ///    - Waits for the job to reach a terminal state
    ///    - Downloads the produced artifact
    /// 4. Generates a summary report
    pub async fn execute_export(&self) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new();

        tracing::info!("Starting export run");

        let topics = self.api.request_topic_info().await;
        if topics.is_empty() {
            tracing::warn!("No topics available, nothing to export");
            return Ok(summary.with_duration(start_time.elapsed()));
        }

        let selected = self.select_topics(topics, &mut summary);
        if selected.is_empty() {
            tracing::warn!("No topics matched the configured filters");
            summary.log_summary();
            return Ok(summary.with_duration(start_time.elapsed()));
        }

        if self.config.export.dry_run {
            tracing::info!(
                topic_count = selected.len(),
                "Dry run enabled, listing topics without exporting"
            );
            for (topic, _token) in &selected {
                tracing::info!(topic = %topic.label(), "Dry run, would export topic");
            }
            return Ok(summary.with_duration(start_time.elapsed()));
        }

        let parallel_topics = self.config.export.parallel_topics.max(1);
        tracing::info!(
            topic_count = selected.len(),
            parallel_topics = parallel_topics,
            "Exporting topics"
        );

        let outcomes: Vec<(Topic, TopicOutcome)> = stream::iter(selected)
            .map(|(topic, token)| async move {
                let outcome = self.process_topic(&topic, &token).await;
                (topic, outcome)
            })
            .buffer_unordered(parallel_topics)
            .collect()
            .await;

        for (_topic, outcome) in outcomes {
            match outcome {
                TopicOutcome::Exported(artifact) => summary.add_artifact(artifact),
                TopicOutcome::Failed(error) => summary.add_error(error),
                TopicOutcome::Interrupted => summary.interrupted = true,
            }
        }

        let duration = start_time.elapsed();
        summary = summary.with_duration(duration);
        summary.log_summary();

        Ok(summary)
    }

    /// Select topics from the catalog by the configured filters
    ///
    /// Topics of a family without a configured download token are recorded
    /// as skipped. When no family filter is configured, only families with
    /// a token are considered.
    fn select_topics(
        &self,
        topics: Vec<Topic>,
        summary: &mut ExportSummary,
    ) -> Vec<(Topic, SecretString)> {
        let families: Vec<BaseTopic> = if self.config.export.base_topics.is_empty() {
            BaseTopic::ALL
                .iter()
                .copied()
                .filter(|family| self.config.geodienste.token_for(*family).is_some())
                .collect()
        } else {
            self.config
                .export
                .base_topics
                .iter()
                .filter_map(|name| name.parse().ok())
                .collect()
        };

        let cantons: Vec<Canton> = self
            .config
            .export
            .cantons
            .iter()
            .filter_map(|code| code.parse().ok())
            .collect();

        let mut selected = Vec::new();
        for topic in topics {
            if !families.contains(&topic.base_topic) {
                continue;
            }
            if !cantons.is_empty() && !cantons.contains(&topic.canton) {
                continue;
            }

            summary.total_topics += 1;

            match self.config.geodienste.token_for(topic.base_topic) {
                Some(token) => selected.push((topic, token.clone())),
                None => {
                    tracing::warn!(
                        topic = %topic.label(),
                        family = %topic.base_topic,
                        "No download token configured for topic family, skipping"
                    );
                    summary.skipped_topics += 1;
                }
            }
        }

        selected
    }

    /// Run the export pipeline for a single topic
    async fn process_topic(&self, topic: &Topic, token: &SecretString) -> TopicOutcome {
        if *self.shutdown_signal.borrow() {
            tracing::warn!(topic = %topic.label(), "Shutdown requested, topic not started");
            return TopicOutcome::Interrupted;
        }

        let token = token.expose_secret().as_ref();

        let start_response = match self.api.start_export(topic, token).await {
            Ok(response) => response,
            Err(e) => {
                return TopicOutcome::Failed(ExportError::new(
                    ExportErrorType::Connection,
                    topic.label(),
                    e.to_string(),
                ));
            }
        };

        if !start_response.is_success() {
            return TopicOutcome::Failed(classify_start_rejection(topic, &start_response));
        }

        let status_response = match self.api.check_export_status(topic, token).await {
            Ok(response) => response,
            Err(e) => {
                return TopicOutcome::Failed(ExportError::new(
                    ExportErrorType::Connection,
                    topic.label(),
                    e.to_string(),
                ));
            }
        };

        if !status_response.is_success() {
            return TopicOutcome::Failed(ExportError::new(
                ExportErrorType::Connection,
                topic.label(),
                format!(
                    "Status check failed with HTTP {}",
                    status_response.status().as_u16()
                ),
            ));
        }

        let status: StatusResponse = match status_response.json() {
            Ok(payload) => payload,
            Err(e) => {
                return TopicOutcome::Failed(ExportError::new(
                    ExportErrorType::Connection,
                    topic.label(),
                    e.to_string(),
                ));
            }
        };

        match status.status {
            ExportStatus::Success => self.download_artifact(topic, &status).await,
            ExportStatus::Error => TopicOutcome::Failed(ExportError::new(
                ExportErrorType::JobFailed,
                topic.label(),
                status
                    .info
                    .unwrap_or_else(|| "Export job reported an error".to_string()),
            )),
            ExportStatus::Queued | ExportStatus::Working => {
                TopicOutcome::Failed(ExportError::new(
                    ExportErrorType::Timeout,
                    topic.label(),
                    format!(
                        "Export was still {} when the retry budget ran out",
                        status.status
                    ),
                ))
            }
        }
    }

    /// Download the artifact of a successful export job
    async fn download_artifact(&self, topic: &Topic, status: &StatusResponse) -> TopicOutcome {
        if !status.is_coherent() {
            tracing::warn!(
                topic = %topic.label(),
                "Success status arrived with an incomplete payload"
            );
        }

        let download_url = match status.download_url.as_deref() {
            Some(url) => url,
            None => {
                return TopicOutcome::Failed(ExportError::new(
                    ExportErrorType::Download,
                    topic.label(),
                    "Success status did not include a download URL",
                ));
            }
        };

        let destination_dir = Path::new(&self.config.export.destination_dir);
        match download_export(download_url, destination_dir).await {
            Ok(artifact) => {
                tracing::info!(
                    topic = %topic.label(),
                    file = %artifact.file_name,
                    "Topic exported"
                );
                TopicOutcome::Exported(artifact)
            }
            Err(e) => TopicOutcome::Failed(ExportError::new(
                ExportErrorType::Download,
                topic.label(),
                e.to_string(),
            )),
        }
    }
}

/// Classifies a non-success response to the export start call
///
/// The pending-export conflict with HTTP 404 means the retry budget inside
/// the client ran out; everything else is a hard rejection.
fn classify_start_rejection(topic: &Topic, response: &ApiResponse) -> ExportError {
    let pending = response.status() == StatusCode::NOT_FOUND
        && response
            .json::<ExportErrorDocument>()
            .map(|doc| doc.is_pending_export())
            .unwrap_or(false);

    if pending {
        ExportError::new(
            ExportErrorType::Timeout,
            topic.label(),
            "Another data export was still pending when the retry budget ran out",
        )
    } else {
        ExportError::new(
            ExportErrorType::StartRejected,
            topic.label(),
            format!(
                "Export start failed with HTTP {}",
                response.status().as_u16()
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::geodienste::models::PENDING_EXPORT_MESSAGE;
    use crate::config::secret_string;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubApi {
        topics: Vec<Topic>,
        start_response: (StatusCode, String),
        status_response: (StatusCode, String),
        start_calls: AtomicUsize,
        status_calls: AtomicUsize,
    }

    impl StubApi {
        fn new(
            topics: Vec<Topic>,
            start_response: (StatusCode, &str),
            status_response: (StatusCode, &str),
        ) -> Arc<Self> {
            Arc::new(Self {
                topics,
                start_response: (start_response.0, start_response.1.to_string()),
                status_response: (status_response.0, status_response.1.to_string()),
                start_calls: AtomicUsize::new(0),
                status_calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl GeodiensteApi for StubApi {
        async fn request_topic_info(&self) -> Vec<Topic> {
            self.topics.clone()
        }

        async fn start_export(&self, _topic: &Topic, _token: &str) -> Result<ApiResponse> {
            self.start_calls.fetch_add(1, Ordering::SeqCst);
            Ok(ApiResponse::new(
                self.start_response.0,
                self.start_response.1.clone(),
            ))
        }

        async fn check_export_status(&self, _topic: &Topic, _token: &str) -> Result<ApiResponse> {
            self.status_calls.fetch_add(1, Ordering::SeqCst);
            Ok(ApiResponse::new(
                self.status_response.0,
                self.status_response.1.clone(),
            ))
        }
    }

    fn sample_topic(canton: Canton) -> Topic {
        Topic {
            base_topic: BaseTopic::Nutzungsflaechen,
            topic_name: "lwb_nutzungsflaechen_v2_0".to_string(),
            topic_title: "Nutzungsflächen".to_string(),
            canton,
            updated_at: None,
        }
    }

    fn test_config() -> LandexConfig {
        let mut config = LandexConfig::default();
        config.geodienste.tokens.insert(
            "lwb_nutzungsflaechen".to_string(),
            secret_string("test-token"),
        );
        config
    }

    fn coordinator(config: LandexConfig, api: Arc<StubApi>) -> ExportCoordinator {
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        ExportCoordinator::with_api(config, api, shutdown_rx)
    }

    fn started_body() -> &'static str {
        r#"{"info": "Data export successfully started."}"#
    }

    #[tokio::test]
    async fn test_empty_catalog_produces_empty_summary() {
        let api = StubApi::new(
            vec![],
            (StatusCode::OK, started_body()),
            (StatusCode::OK, "{}"),
        );
        let summary = coordinator(test_config(), api.clone())
            .execute_export()
            .await
            .unwrap();

        assert_eq!(summary.total_topics, 0);
        assert!(summary.is_successful());
        assert_eq!(api.start_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_topic_without_token_is_skipped() {
        let mut config = LandexConfig::default();
        config.export.base_topics = vec!["lwb_nutzungsflaechen".to_string()];

        let api = StubApi::new(
            vec![sample_topic(Canton::BE)],
            (StatusCode::OK, started_body()),
            (StatusCode::OK, "{}"),
        );
        let summary = coordinator(config, api.clone()).execute_export().await.unwrap();

        assert_eq!(summary.total_topics, 1);
        assert_eq!(summary.skipped_topics, 1);
        assert_eq!(summary.successful_exports, 0);
        assert_eq!(api.start_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_families_without_token_are_not_selected_by_default() {
        // No family filter configured and no token for the catalog's family
        let config = LandexConfig::default();

        let api = StubApi::new(
            vec![sample_topic(Canton::BE)],
            (StatusCode::OK, started_body()),
            (StatusCode::OK, "{}"),
        );
        let summary = coordinator(config, api.clone()).execute_export().await.unwrap();

        assert_eq!(summary.total_topics, 0);
        assert_eq!(summary.skipped_topics, 0);
        assert_eq!(api.start_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_canton_filter_narrows_selection() {
        let mut config = test_config();
        config.export.cantons = vec!["BE".to_string()];

        let api = StubApi::new(
            vec![sample_topic(Canton::BE), sample_topic(Canton::ZH)],
            (StatusCode::UNAUTHORIZED, "Unauthorized"),
            (StatusCode::OK, "{}"),
        );
        let summary = coordinator(config, api.clone()).execute_export().await.unwrap();

        assert_eq!(summary.total_topics, 1);
        assert_eq!(api.start_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_dry_run_makes_no_export_calls() {
        let mut config = test_config();
        config.export.dry_run = true;

        let api = StubApi::new(
            vec![sample_topic(Canton::BE)],
            (StatusCode::OK, started_body()),
            (StatusCode::OK, "{}"),
        );
        let summary = coordinator(config, api.clone()).execute_export().await.unwrap();

        assert_eq!(summary.total_topics, 1);
        assert!(summary.is_successful());
        assert_eq!(api.start_calls.load(Ordering::SeqCst), 0);
        assert_eq!(api.status_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_start_rejection_is_classified() {
        let api = StubApi::new(
            vec![sample_topic(Canton::BE)],
            (StatusCode::UNAUTHORIZED, "Unauthorized"),
            (StatusCode::OK, "{}"),
        );
        let summary = coordinator(test_config(), api.clone())
            .execute_export()
            .await
            .unwrap();

        assert_eq!(summary.failed_exports, 1);
        assert_eq!(summary.errors[0].error_type, ExportErrorType::StartRejected);
        // The status endpoint is never consulted after a rejected start
        assert_eq!(api.status_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_exhausted_pending_conflict_maps_to_timeout() {
        let body = format!(r#"{{"error": "{PENDING_EXPORT_MESSAGE}"}}"#);
        let api = StubApi::new(
            vec![sample_topic(Canton::BE)],
            (StatusCode::NOT_FOUND, body.as_str()),
            (StatusCode::OK, "{}"),
        );
        let summary = coordinator(test_config(), api.clone())
            .execute_export()
            .await
            .unwrap();

        assert_eq!(summary.failed_exports, 1);
        assert_eq!(summary.errors[0].error_type, ExportErrorType::Timeout);
    }

    #[tokio::test]
    async fn test_job_error_is_recorded() {
        let api = StubApi::new(
            vec![sample_topic(Canton::BE)],
            (StatusCode::OK, started_body()),
            (
                StatusCode::OK,
                r#"{"status": "error", "info": "An unexpected error occurred"}"#,
            ),
        );
        let summary = coordinator(test_config(), api.clone())
            .execute_export()
            .await
            .unwrap();

        assert_eq!(summary.failed_exports, 1);
        assert_eq!(summary.errors[0].error_type, ExportErrorType::JobFailed);
        assert_eq!(summary.errors[0].message, "An unexpected error occurred");
    }

    #[tokio::test]
    async fn test_nonterminal_status_maps_to_timeout() {
        let api = StubApi::new(
            vec![sample_topic(Canton::BE)],
            (StatusCode::OK, started_body()),
            (
                StatusCode::OK,
                r#"{"status": "working", "info": "Export in progress"}"#,
            ),
        );
        let summary = coordinator(test_config(), api.clone())
            .execute_export()
            .await
            .unwrap();

        assert_eq!(summary.failed_exports, 1);
        assert_eq!(summary.errors[0].error_type, ExportErrorType::Timeout);
        assert!(summary.errors[0].message.contains("working"));
    }

    #[tokio::test]
    async fn test_success_without_download_url_is_a_download_failure() {
        let api = StubApi::new(
            vec![sample_topic(Canton::BE)],
            (StatusCode::OK, started_body()),
            (StatusCode::OK, r#"{"status": "success"}"#),
        );
        let summary = coordinator(test_config(), api.clone())
            .execute_export()
            .await
            .unwrap();

        assert_eq!(summary.failed_exports, 1);
        assert_eq!(summary.errors[0].error_type, ExportErrorType::Download);
    }

    #[tokio::test]
    async fn test_shutdown_before_dispatch_interrupts_run() {
        let api = StubApi::new(
            vec![sample_topic(Canton::BE)],
            (StatusCode::OK, started_body()),
            (StatusCode::OK, "{}"),
        );
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        shutdown_tx.send(true).unwrap();

        let coordinator = ExportCoordinator::with_api(test_config(), api.clone(), shutdown_rx);
        let summary = coordinator.execute_export().await.unwrap();

        assert!(summary.interrupted);
        assert!(!summary.is_successful());
        assert_eq!(api.start_calls.load(Ordering::SeqCst), 0);
    }
}
