//! geodienste.ch API trait definition
//!
//! This module defines the `GeodiensteApi` trait that abstracts the download
//! API behind the three exchanges the pipeline drives. The export
//! coordinator works against this trait, so tests can substitute canned
//! responses without a live server.

use async_trait::async_trait;

use crate::adapters::geodienste::response::ApiResponse;
use crate::domain::{Result, Topic};

/// Interface of the geodienste.ch download API.
///
/// `start_export` and `check_export_status` resolve to a terminal
/// [`ApiResponse`] after bounded retrying; `request_topic_info` recovers
/// locally and never fails.
#[async_trait]
pub trait GeodiensteApi: Send + Sync {
    /// Fetches the catalog of available topics.
    ///
    /// Returns an empty vector on any failure; the caller treats that as
    /// "no topics available this run".
    async fn request_topic_info(&self) -> Vec<Topic>;

    /// Starts an export job for `topic`, retrying while another export is
    /// pending.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport-level failures; every HTTP
    /// response, including the exhausted-retry conflict, is an `Ok` value.
    async fn start_export(&self, topic: &Topic, token: &str) -> Result<ApiResponse>;

    /// Polls the status of `topic`'s export job until it is terminal or the
    /// attempt bound is reached.
    ///
    /// # Errors
    ///
    /// Returns an error for transport-level failures and for 2xx responses
    /// whose body cannot be parsed as a status payload.
    async fn check_export_status(&self, topic: &Topic, token: &str) -> Result<ApiResponse>;
}
