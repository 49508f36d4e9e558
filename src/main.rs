//! DocVault: command-line document manager with linear version history.
//!
//! Loads configuration, initializes logging, and dispatches one command.
//! Every failure reaches the user as a notice; the process exits non-zero.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use docvault_core::config::AppConfig;
use docvault_core::error::AppError;
use docvault_service::notice;

mod commands;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            output::print_notice(&notice::notice_for(&e), cli.format);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        command = cli.command.action(),
        gateway = %config.gateway.base_url,
        "Starting DocVault"
    );

    if let Err(n) = notice::guard(cli.command.action(), cli.execute(config)).await {
        output::print_notice(&n, cli.format);
        std::process::exit(1);
    }
}

/// Load configuration from file, environment overlay, and variables.
///
/// `DOCVAULT_CONFIG` overrides the `--config` path; `DOCVAULT_ENV` selects
/// the `config/{env}.toml` overlay.
fn load_configuration(cli_path: &str) -> Result<AppConfig, AppError> {
    let config_path = std::env::var("DOCVAULT_CONFIG").unwrap_or_else(|_| cli_path.to_string());
    let env = std::env::var("DOCVAULT_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&config_path, &env)
}

/// Initialize tracing. Logs go to stderr so command output stays clean.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
