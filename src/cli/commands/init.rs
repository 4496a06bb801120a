//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = "landex.toml")]
    pub output: String,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    ///
    /// # Returns
    ///
    /// Returns the process exit code: 0 on success, 1 if the file could not
    /// be written, 2 if the file exists and `--force` was not given.
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Landex configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::config_template()) {
            Ok(()) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Add your download tokens under [geodienste.tokens],");
                println!("     or export them as LANDEX_TOKEN_<FAMILY> variables:");
                println!("     export LANDEX_TOKEN_LWB_NUTZUNGSFLAECHEN=\"your-token\"");
                println!("  3. Validate the configuration: landex validate-config");
                println!("  4. Run the export: landex export");
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to write configuration file");
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(1)
            }
        }
    }

    /// Commented starter template written by `landex init`
    fn config_template() -> &'static str {
        r#"# Landex configuration
# Exports agricultural geodata (LWB datasets) from geodienste.ch.

[application]
# Log level: trace, debug, info, warn, error
log_level = "info"

[geodienste]
base_url = "https://geodienste.ch"
timeout_seconds = 60
# Seconds to wait between retries while an export is queued or running
retry_interval_seconds = 60

# Per-family download tokens, issued by geodienste.ch.
# Values support environment substitution: token = "${MY_TOKEN_VAR}"
# Tokens can also be supplied as LANDEX_TOKEN_<FAMILY> environment variables.
[geodienste.tokens]
# lwb_perimeter_ln_sf = "your-token"
# lwb_rebbaukataster = "your-token"
# lwb_perimeter_terrassenreben = "your-token"
# lwb_biodiversitaetsfoerderflaechen = "your-token"
# lwb_bewirtschaftungseinheit = "your-token"
# lwb_nutzungsflaechen = "your-token"

[export]
# Topic families to export; empty means every family with a configured token
base_topics = []
# Canton codes to export; empty means all cantons
cantons = []
destination_dir = "./exports"
parallel_topics = 4
dry_run = false
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LandexConfig;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "landex.toml".to_string(),
            force: false,
        };

        assert_eq!(args.output, "landex.toml");
        assert!(!args.force);
    }

    #[test]
    fn test_config_template_parses_and_validates() {
        let config: LandexConfig = toml::from_str(InitArgs::config_template()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.geodienste.base_url, "https://geodienste.ch");
        assert!(config.geodienste.tokens.is_empty());
    }

    #[test]
    fn test_config_template_mentions_every_family() {
        let template = InitArgs::config_template();
        for base_topic in crate::domain::BaseTopic::ALL {
            assert!(template.contains(base_topic.as_str()));
        }
    }
}
