//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use docvault_core::config::AppConfig;
use docvault_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration
    Validate,
    /// Generate a default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
///
/// `config` is the already loaded and validated configuration.
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let mut shown = config;
            shown.gateway.token = shown.gateway.token.map(|t| mask_token(&t));
            output::print_item(&shown, format);
        }
        ConfigCommand::Validate => {
            output::print_success(&format!("Configuration '{config_path}' is valid"));
            output::print_kv("Gateway", &config.gateway.base_url);
            output::print_kv("Timeout", &format!("{}s", config.gateway.timeout_seconds));
            output::print_kv("Document server", &config.viewer.document_server_url);
            output::print_kv("Log level", &config.logging.level);
        }
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../config/default.toml");

            if let Some(parent) = std::path::Path::new(out_path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(out_path, default_config).await?;

            output::print_success(&format!("Default config written to '{out_path}'"));
        }
    }

    Ok(())
}

/// Mask all but the last four characters of a token for display
fn mask_token(token: &str) -> String {
    let count = token.chars().count();
    if count <= 4 {
        return "****".to_string();
    }
    let tail: String = token.chars().skip(count - 4).collect();
    format!("****{tail}")
}
