//! geodienste.ch download API client
//!
//! This module drives the three exchanges of the download API: the catalog
//! fetch, the start-export call, and the status poll. Only one export job
//! may run per account and a started job passes through `queued` and
//! `working` before it finishes, so the start and status exchanges retry a
//! bounded number of times and always resolve to a terminal
//! [`ApiResponse`]. Every retry decision is logged; the log cadence is part
//! of the client's contract.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};

use crate::adapters::geodienste::api::GeodiensteApi;
use crate::adapters::geodienste::models::{ExportErrorDocument, TopicInfoDocument};
use crate::adapters::geodienste::response::ApiResponse;
use crate::adapters::geodienste::wait::WaitStrategy;
use crate::config::GeodiensteConfig;
use crate::domain::{
    BaseTopic, Canton, ExportStatus, GeodiensteError, LandexError, Result, StatusResponse, Topic,
};

/// Upper bound on attempts for the start-export and status-check exchanges.
///
/// Attempts are 0-indexed: attempts `0..=8` may retry after the wait
/// strategy's delay, attempt `9` resolves the exchange either way.
pub const MAX_ATTEMPTS: usize = 10;

/// Language code sent with every catalog query.
const CATALOG_LANGUAGE: &str = "de";

/// Bytes of response body kept in error messages.
const ERROR_BODY_LIMIT: usize = 200;

/// Client for the geodienste.ch download API.
///
/// # Example
///
/// ```no_run
/// use landex::adapters::geodienste::GeodiensteClient;
/// use landex::config::GeodiensteConfig;
///
/// # async fn example() -> landex::domain::Result<()> {
/// let config = GeodiensteConfig::default();
/// let client = GeodiensteClient::new(&config)?;
///
/// let topics = client.request_topic_info().await;
/// println!("{} topics available", topics.len());
/// # Ok(())
/// # }
/// ```
pub struct GeodiensteClient {
    /// Base URL of the service, without a trailing slash
    base_url: String,

    /// HTTP client for making requests
    client: Client,

    /// Delay supplier between retry attempts
    wait: WaitStrategy,
}

impl GeodiensteClient {
    /// Creates a client from the service configuration.
    ///
    /// The wait strategy defaults to the configured retry interval.
    ///
    /// # Errors
    ///
    /// Returns [`GeodiensteError::ConnectionFailed`] when the HTTP client
    /// cannot be built.
    pub fn new(config: &GeodiensteConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                LandexError::Geodienste(GeodiensteError::ConnectionFailed(format!(
                    "Failed to build HTTP client: {e}"
                )))
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            wait: WaitStrategy::fixed(Duration::from_secs(config.retry_interval_seconds)),
        })
    }

    /// Replaces the wait strategy, consuming and returning the client.
    pub fn with_wait_strategy(mut self, wait: WaitStrategy) -> Self {
        self.wait = wait;
        self
    }

    /// Fetches the catalog of available topics.
    ///
    /// The catalog query always asks for the full fixed set of dataset
    /// families, versioned topic names, and cantons. Any failure is
    /// recovered locally: it is logged once and an empty vector is
    /// returned, which callers treat as "no topics available this run".
    pub async fn request_topic_info(&self) -> Vec<Topic> {
        let url = self.info_url();
        tracing::info!(url = %url, "Requesting topic information");

        match self.fetch_topics(&url).await {
            Ok(topics) => {
                tracing::debug!(count = topics.len(), "Received topic information");
                topics
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "Failed to fetch topic information, continuing with an empty catalog"
                );
                Vec::new()
            }
        }
    }

    /// Starts an export job for `topic`.
    ///
    /// The service runs at most one export per account; while another one
    /// is pending it answers 404 with a well-known error message. Only that
    /// shape is retried, up to [`MAX_ATTEMPTS`] attempts with the wait
    /// strategy's delay in between. Every other response, unauthorized
    /// included, is returned to the caller unmodified on the first attempt.
    ///
    /// # Errors
    ///
    /// Transport-level failures are not retried and propagate as
    /// [`GeodiensteError::ConnectionFailed`].
    pub async fn start_export(&self, topic: &Topic, token: &str) -> Result<ApiResponse> {
        let url = self.export_url(topic.base_topic.as_str(), token);
        let mut attempt = 0;

        loop {
            if attempt == 0 {
                tracing::info!(
                    topic = %topic.topic_title,
                    canton = %topic.canton,
                    url = %url,
                    "Starting data export"
                );
            }

            let response = self.send_request(&url).await?;

            if !Self::is_pending_conflict(&response) {
                return Ok(response);
            }

            if attempt < MAX_ATTEMPTS - 1 {
                tracing::info!(
                    topic = %topic.topic_title,
                    canton = %topic.canton,
                    retry_in_secs = self.wait.delay().as_secs(),
                    "Another data export is pending, retrying"
                );
                tokio::time::sleep(self.wait.delay()).await;
                attempt += 1;
            } else {
                tracing::error!(
                    topic = %topic.topic_title,
                    canton = %topic.canton,
                    "Attempt limit reached, another data export is still pending"
                );
                return Ok(response);
            }
        }
    }

    /// Polls the status of `topic`'s export job.
    ///
    /// Non-2xx responses are terminal and returned as-is. For 2xx
    /// responses the body's `status` field decides: `queued` and `working`
    /// retry up to [`MAX_ATTEMPTS`] attempts, `success` and `error` return
    /// immediately. When the bound is reached while the job is still
    /// running, the last non-terminal response is returned so callers see
    /// the timeout as a distinguishable outcome, not a success.
    ///
    /// # Errors
    ///
    /// Transport-level failures and 2xx bodies that cannot be parsed as a
    /// status payload propagate as errors.
    pub async fn check_export_status(&self, topic: &Topic, token: &str) -> Result<ApiResponse> {
        let url = self.status_url(topic.base_topic.as_str(), token);
        let mut attempt = 0;

        loop {
            if attempt == 0 {
                tracing::info!(
                    topic = %topic.topic_title,
                    canton = %topic.canton,
                    url = %url,
                    "Checking export status"
                );
            }

            let response = self.send_request(&url).await?;

            if !response.is_success() {
                return Ok(response);
            }

            let payload: StatusResponse = response.json()?;
            match payload.status {
                ExportStatus::Success | ExportStatus::Error => return Ok(response),
                ExportStatus::Queued if attempt < MAX_ATTEMPTS - 1 => {
                    tracing::info!(
                        topic = %topic.topic_title,
                        canton = %topic.canton,
                        retry_in_secs = self.wait.delay().as_secs(),
                        "Export is queued, retrying"
                    );
                    tokio::time::sleep(self.wait.delay()).await;
                    attempt += 1;
                }
                ExportStatus::Working if attempt < MAX_ATTEMPTS - 1 => {
                    tracing::info!(
                        topic = %topic.topic_title,
                        canton = %topic.canton,
                        retry_in_secs = self.wait.delay().as_secs(),
                        "Export is in progress, retrying"
                    );
                    tokio::time::sleep(self.wait.delay()).await;
                    attempt += 1;
                }
                status => {
                    tracing::error!(
                        topic = %topic.topic_title,
                        canton = %topic.canton,
                        status = %status,
                        "Retry limit reached, export is still running"
                    );
                    return Ok(response);
                }
            }
        }
    }

    async fn fetch_topics(&self, url: &str) -> std::result::Result<Vec<Topic>, GeodiensteError> {
        let response = self.send_request(url).await?;

        if !response.is_success() {
            return Err(GeodiensteError::UnexpectedStatus {
                status: response.status().as_u16(),
                body: truncate_body(response.body()),
            });
        }

        let document: TopicInfoDocument = response.json()?;
        Ok(document.services)
    }

    async fn send_request(&self, url: &str) -> std::result::Result<ApiResponse, GeodiensteError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GeodiensteError::ConnectionFailed(e.to_string()))?;

        ApiResponse::read(response).await
    }

    /// Recoverable conflict: 404 with the exact pending-export message.
    fn is_pending_conflict(response: &ApiResponse) -> bool {
        if response.status() != StatusCode::NOT_FOUND {
            return false;
        }
        response
            .json::<ExportErrorDocument>()
            .map(|document| document.is_pending_export())
            .unwrap_or(false)
    }

    fn info_url(&self) -> String {
        let base_topics = BaseTopic::ALL
            .iter()
            .map(|base_topic| base_topic.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let topics = BaseTopic::ALL
            .iter()
            .map(|base_topic| base_topic.topic_name())
            .collect::<Vec<_>>()
            .join(",");
        let cantons = Canton::ALL
            .iter()
            .map(|canton| canton.as_str())
            .collect::<Vec<_>>()
            .join(",");

        format!(
            "{}/info/services.json?base_topics={}&topics={}&cantons={}&language={}",
            self.base_url, base_topics, topics, cantons, CATALOG_LANGUAGE
        )
    }

    fn export_url(&self, base_topic: &str, token: &str) -> String {
        format!("{}/downloads/{}/{}/export.json", self.base_url, base_topic, token)
    }

    fn status_url(&self, base_topic: &str, token: &str) -> String {
        format!("{}/downloads/{}/{}/status.json", self.base_url, base_topic, token)
    }
}

#[async_trait]
impl GeodiensteApi for GeodiensteClient {
    async fn request_topic_info(&self) -> Vec<Topic> {
        GeodiensteClient::request_topic_info(self).await
    }

    async fn start_export(&self, topic: &Topic, token: &str) -> Result<ApiResponse> {
        GeodiensteClient::start_export(self, topic, token).await
    }

    async fn check_export_status(&self, topic: &Topic, token: &str) -> Result<ApiResponse> {
        GeodiensteClient::check_export_status(self, topic, token).await
    }
}

fn truncate_body(body: &str) -> String {
    if body.len() <= ERROR_BODY_LIMIT {
        return body.to_string();
    }
    let mut end = ERROR_BODY_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::geodienste::models::PENDING_EXPORT_MESSAGE;
    use std::collections::HashMap;

    fn test_client() -> GeodiensteClient {
        let config = GeodiensteConfig {
            base_url: "https://geodienste.ch".to_string(),
            timeout_seconds: 30,
            retry_interval_seconds: 60,
            tokens: HashMap::new(),
        };
        GeodiensteClient::new(&config).unwrap()
    }

    fn conflict_body() -> String {
        format!(r#"{{"error": "{PENDING_EXPORT_MESSAGE}"}}"#)
    }

    #[test]
    fn test_attempt_bound_is_ten() {
        assert_eq!(MAX_ATTEMPTS, 10);
    }

    #[test]
    fn test_trailing_slash_is_trimmed_from_base_url() {
        let config = GeodiensteConfig {
            base_url: "https://geodienste.ch/".to_string(),
            timeout_seconds: 30,
            retry_interval_seconds: 60,
            tokens: HashMap::new(),
        };
        let client = GeodiensteClient::new(&config).unwrap();
        assert_eq!(
            client.export_url("lwb_nutzungsflaechen", "token"),
            "https://geodienste.ch/downloads/lwb_nutzungsflaechen/token/export.json"
        );
    }

    #[test]
    fn test_info_url_names_every_family_and_canton() {
        let url = test_client().info_url();
        assert!(url.starts_with("https://geodienste.ch/info/services.json?base_topics="));
        for base_topic in BaseTopic::ALL {
            assert!(url.contains(base_topic.as_str()));
            assert!(url.contains(&base_topic.topic_name()));
        }
        for canton in Canton::ALL {
            assert!(url.contains(canton.as_str()));
        }
        assert!(url.ends_with("&language=de"));
    }

    #[test]
    fn test_status_url_embeds_token() {
        assert_eq!(
            test_client().status_url("lwb_rebbaukataster", "secret-token"),
            "https://geodienste.ch/downloads/lwb_rebbaukataster/secret-token/status.json"
        );
    }

    #[test]
    fn test_conflict_requires_not_found_and_exact_message() {
        let conflict = ApiResponse::new(StatusCode::NOT_FOUND, conflict_body());
        assert!(GeodiensteClient::is_pending_conflict(&conflict));

        let other_message = ApiResponse::new(
            StatusCode::NOT_FOUND,
            r#"{"error": "Data export not possible"}"#,
        );
        assert!(!GeodiensteClient::is_pending_conflict(&other_message));

        let wrong_status = ApiResponse::new(StatusCode::INTERNAL_SERVER_ERROR, conflict_body());
        assert!(!GeodiensteClient::is_pending_conflict(&wrong_status));

        let unparseable = ApiResponse::new(StatusCode::NOT_FOUND, "<html>not found</html>");
        assert!(!GeodiensteClient::is_pending_conflict(&unparseable));
    }

    #[test]
    fn test_truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn test_truncate_body_limits_long_bodies() {
        let long = "x".repeat(5000);
        let truncated = truncate_body(&long);
        assert!(truncated.len() <= ERROR_BODY_LIMIT + 3);
        assert!(truncated.ends_with("..."));
    }
}
