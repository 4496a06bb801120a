//! Export command implementation
//!
//! This module implements the `export` command for exporting agricultural
//! geodata topics from geodienste.ch to the local filesystem.

use crate::config::load_config;
use crate::core::export::ExportCoordinator;
use clap::Args;
use tokio::sync::watch;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// List the selected topics without starting any export
    #[arg(long)]
    pub dry_run: bool,

    /// Comma-separated topic families to export (e.g. lwb_nutzungsflaechen)
    #[arg(long)]
    pub base_topic: Option<String>,

    /// Comma-separated canton codes to export (e.g. BE,ZH)
    #[arg(long)]
    pub canton: Option<String>,

    /// Destination directory for downloaded artifacts
    #[arg(long)]
    pub destination: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    ///
    /// # Arguments
    ///
    /// * `config_path` - Path to the configuration file
    /// * `shutdown_signal` - Watch channel receiver flipped to `true` on shutdown
    ///
    /// # Returns
    ///
    /// Returns the process exit code: 0 on success, 1 on export failures,
    /// 2 on configuration errors, 130 when interrupted by a signal.
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        // Apply CLI overrides
        if let Some(families) = &self.base_topic {
            let names: Vec<String> = families.split(',').map(|s| s.trim().to_string()).collect();
            tracing::info!(base_topics = ?names, "Overriding topic families from CLI");
            config.export.base_topics = names;
        }

        if let Some(cantons) = &self.canton {
            let codes: Vec<String> = cantons.split(',').map(|s| s.trim().to_string()).collect();
            tracing::info!(cantons = ?codes, "Overriding cantons from CLI");
            config.export.cantons = codes;
        }

        if let Some(destination) = &self.destination {
            tracing::info!(destination = %destination, "Overriding destination directory from CLI");
            config.export.destination_dir = destination.clone();
        }

        if self.dry_run {
            config.export.dry_run = true;
        }

        // Re-validate after overrides
        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        if config.export.dry_run {
            tracing::info!("Dry run mode enabled - no exports will be started");
            println!("🔍 DRY RUN MODE - No exports will be started");
            println!();
        }

        // Confirmation prompt
        if !self.yes && !config.export.dry_run {
            println!("Export Configuration:");
            println!("  Families: {}", describe_filter(&config.export.base_topics));
            println!("  Cantons: {}", describe_filter(&config.export.cantons));
            println!("  Destination: {}", config.export.destination_dir);
            println!("  Parallel Topics: {}", config.export.parallel_topics);
            println!();
            print!("Proceed with export? [y/N]: ");

            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Export cancelled.");
                return Ok(0);
            }
        }

        // Create export coordinator
        tracing::info!("Creating export coordinator");
        let coordinator = match ExportCoordinator::new(config, shutdown_signal) {
            Ok(coordinator) => coordinator,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create export coordinator");
                eprintln!("Failed to initialize export: {e}");
                return Ok(1);
            }
        };

        tracing::info!("Executing export");
        println!("🚀 Starting export...");
        println!();

        let summary = match coordinator.execute_export().await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(1);
            }
        };

        // Display summary
        println!();
        println!("📊 Export Summary:");
        println!("  Topics Selected: {}", summary.total_topics);
        println!("  Successful: {}", summary.successful_exports);
        println!("  Failed: {}", summary.failed_exports);
        println!("  Skipped: {}", summary.skipped_topics);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!("  Success Rate: {:.2}%", summary.success_rate());
        println!();

        if !summary.artifacts.is_empty() {
            println!("📦 Downloaded artifacts:");
            for artifact in &summary.artifacts {
                println!(
                    "  - {} ({} bytes, sha256 {})",
                    artifact.path.display(),
                    artifact.bytes_written,
                    artifact.sha256
                );
            }
            println!();
        }

        if !summary.errors.is_empty() {
            println!("⚠️  Errors encountered:");
            for error in &summary.errors {
                println!("  - {:?} [{}]: {}", error.error_type, error.topic, error.message);
            }
            println!();
        }

        let exit_code = if summary.interrupted {
            println!("⚠️  Export interrupted gracefully.");
            println!("   Run the same command again to export the remaining topics.");
            tracing::info!("Export interrupted by user signal");
            130
        } else if summary.is_successful() {
            println!("✅ Export completed successfully!");
            0
        } else {
            println!("⚠️  Export completed with failures");
            1
        };

        Ok(exit_code)
    }
}

/// Render a filter list for the confirmation prompt
fn describe_filter(entries: &[String]) -> String {
    if entries.is_empty() {
        "All".to_string()
    } else {
        entries.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_args_defaults() {
        let args = ExportArgs {
            yes: false,
            dry_run: false,
            base_topic: None,
            canton: None,
            destination: None,
        };

        assert!(!args.yes);
        assert!(!args.dry_run);
        assert!(args.base_topic.is_none());
        assert!(args.canton.is_none());
        assert!(args.destination.is_none());
    }

    #[test]
    fn test_export_args_with_overrides() {
        let args = ExportArgs {
            yes: true,
            dry_run: true,
            base_topic: Some("lwb_nutzungsflaechen".to_string()),
            canton: Some("BE,ZH".to_string()),
            destination: Some("/tmp/exports".to_string()),
        };

        assert!(args.yes);
        assert!(args.dry_run);
        assert_eq!(args.base_topic, Some("lwb_nutzungsflaechen".to_string()));
        assert_eq!(args.canton, Some("BE,ZH".to_string()));
        assert_eq!(args.destination, Some("/tmp/exports".to_string()));
    }

    #[test]
    fn test_describe_filter_empty() {
        assert_eq!(describe_filter(&[]), "All");
    }

    #[test]
    fn test_describe_filter_entries() {
        let entries = vec!["BE".to_string(), "ZH".to_string()];
        assert_eq!(describe_filter(&entries), "BE, ZH");
    }
}
