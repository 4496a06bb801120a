//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Landex using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Landex - geodienste.ch export tool
#[derive(Parser, Debug)]
#[command(name = "landex")]
#[command(version, about, long_about = None)]
#[command(author = "Landex Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "landex.toml", env = "LANDEX_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LANDEX_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rotated JSON log files
    #[arg(long, env = "LANDEX_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export topics from geodienste.ch to the destination directory
    Export(commands::export::ExportArgs),

    /// List the topic catalog published by geodienste.ch
    Topics(commands::topics::TopicsArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
