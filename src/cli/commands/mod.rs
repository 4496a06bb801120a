//! CLI command implementations
//!
//! This module contains the implementation of each Landex subcommand.

pub mod export;
pub mod init;
pub mod topics;
pub mod validate;
