//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting the results of
//! an export run across all selected topics.

use crate::core::download::DownloadedArtifact;
use std::time::Duration;

/// Summary of an export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Number of topics selected from the catalog
    pub total_topics: usize,

    /// Number of topics exported and downloaded successfully
    pub successful_exports: usize,

    /// Number of topics that failed
    pub failed_exports: usize,

    /// Number of topics skipped because no download token was configured
    pub skipped_topics: usize,

    /// Whether the run was interrupted by a shutdown signal
    pub interrupted: bool,

    /// Duration of the run
    pub duration: Duration,

    /// Errors encountered during the run
    pub errors: Vec<ExportError>,

    /// Artifacts downloaded during the run
    pub artifacts: Vec<DownloadedArtifact>,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self {
            total_topics: 0,
            successful_exports: 0,
            failed_exports: 0,
            skipped_topics: 0,
            interrupted: false,
            duration: Duration::from_secs(0),
            errors: Vec::new(),
            artifacts: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a failed topic
    pub fn add_error(&mut self, error: ExportError) {
        self.failed_exports += 1;
        self.errors.push(error);
    }

    /// Record a successfully downloaded artifact
    pub fn add_artifact(&mut self, artifact: DownloadedArtifact) {
        self.successful_exports += 1;
        self.artifacts.push(artifact);
    }

    /// Check if the run was successful (no failures, not interrupted)
    pub fn is_successful(&self) -> bool {
        self.failed_exports == 0 && self.errors.is_empty() && !self.interrupted
    }

    /// Get success rate as a percentage of attempted topics
    pub fn success_rate(&self) -> f64 {
        let attempted = self.successful_exports + self.failed_exports;
        if attempted == 0 {
            return 100.0;
        }
        (self.successful_exports as f64 / attempted as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_topics = self.total_topics,
            successful = self.successful_exports,
            failed = self.failed_exports,
            skipped = self.skipped_topics,
            duration_secs = self.duration.as_secs(),
            success_rate = format!("{:.2}%", self.success_rate()),
            "Export run completed"
        );

        if self.interrupted {
            tracing::warn!("Export run was interrupted before completion");
        }

        if !self.errors.is_empty() {
            tracing::warn!(
                error_count = self.errors.len(),
                "Export run completed with errors"
            );
            for error in &self.errors {
                tracing::warn!(
                    error_type = ?error.error_type,
                    topic = %error.topic,
                    message = %error.message,
                    "Export error"
                );
            }
        }
    }
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// Type of export error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportErrorType {
    /// The export start was rejected with something other than the pending
    /// conflict
    StartRejected,

    /// The export job ran and reported a terminal error status
    JobFailed,

    /// The export was still pending or running when the retry budget ran out
    Timeout,

    /// Connection or protocol failure while talking to the API
    Connection,

    /// The produced artifact could not be downloaded
    Download,
}

/// Export error with the topic it occurred on
#[derive(Debug, Clone)]
pub struct ExportError {
    /// Type of error
    pub error_type: ExportErrorType,

    /// Topic label (title and canton)
    pub topic: String,

    /// Error message
    pub message: String,
}

impl ExportError {
    /// Create a new export error
    pub fn new(
        error_type: ExportErrorType,
        topic: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error_type,
            topic: topic.into(),
            message: message.into(),
        }
    }
}
