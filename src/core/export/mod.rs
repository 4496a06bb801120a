//! Export orchestration
//!
//! This module provides the core export logic for Landex, including:
//! - Export coordination across selected topics
//! - Summary and reporting

pub mod coordinator;
pub mod summary;

pub use coordinator::ExportCoordinator;
pub use summary::{ExportError, ExportErrorType, ExportSummary};
