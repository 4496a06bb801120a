//! Domain models and types for landex.
//!
//! This module contains the core domain models, types, and business rules
//! for driving exports on geodienste.ch.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Dataset vocabulary** ([`BaseTopic`], [`Canton`], [`Topic`])
//! - **Job state model** ([`ExportStatus`], [`StatusResponse`])
//! - **Error types** ([`LandexError`], [`GeodiensteError`], [`DownloadError`])
//! - **Result type alias** ([`Result`])
//!
//! # Job state
//!
//! An export job progresses strictly forward and only ever finishes in
//! `success` or `error`:
//!
//! ```rust
//! use landex::domain::ExportStatus;
//!
//! assert!(!ExportStatus::Queued.is_terminal());
//! assert!(!ExportStatus::Working.is_terminal());
//! assert!(ExportStatus::Success.is_terminal());
//! assert!(ExportStatus::Error.is_terminal());
//! ```
//!
//! # Error handling
//!
//! All fallible operations return [`Result<T, LandexError>`]:
//!
//! ```rust
//! use landex::domain::{LandexError, Result};
//!
//! fn example() -> Result<()> {
//!     let canton: landex::domain::Canton = "BE".parse()?;
//!     assert_eq!(canton.as_str(), "BE");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod canton;
pub mod errors;
pub mod result;
pub mod status;
pub mod topic;

// Re-export commonly used types for convenience
pub use canton::Canton;
pub use errors::{DownloadError, GeodiensteError, LandexError};
pub use result::Result;
pub use status::{ExportStatus, StatusResponse};
pub use topic::{BaseTopic, Topic};
