//! geodienste.ch download API adapter
//!
//! This module contains everything that talks to geodienste.ch: the HTTP
//! client driving the catalog, start-export, and status-check exchanges,
//! the wire documents, the shared response envelope, and the wait strategy
//! between retry attempts.
//!
//! The export coordinator depends on the [`GeodiensteApi`] trait rather
//! than the concrete client, which keeps the pipeline testable without a
//! live service.

pub mod api;
pub mod client;
pub mod models;
pub mod response;
pub mod wait;

// Re-export commonly used types for convenience
pub use api::GeodiensteApi;
pub use client::{GeodiensteClient, MAX_ATTEMPTS};
pub use models::{
    ExportErrorDocument, ExportStartedDocument, TopicInfoDocument, PENDING_EXPORT_MESSAGE,
};
pub use response::ApiResponse;
pub use wait::{WaitStrategy, DEFAULT_RETRY_INTERVAL};
