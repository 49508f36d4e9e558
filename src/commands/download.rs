//! Version download.

use clap::Args;

use docvault_core::config::AppConfig;
use docvault_core::error::AppError;
use docvault_service::Notice;

use crate::output::{self, OutputFormat};

/// Arguments for the download command
#[derive(Debug, Args)]
pub struct DownloadArgs {
    /// Document file name
    pub file_name: String,
    /// Version to download; the current one when omitted
    #[arg(short, long)]
    pub version: Option<String>,
    /// Output path; defaults to the document name in the working directory
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Execute the download command
pub async fn execute(
    args: &DownloadArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let registry = super::connect(config).await?;
    let (version, content) = registry
        .download
        .download(&args.file_name, args.version.as_deref())
        .await?;

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| super::file_name_of(&args.file_name));
    tokio::fs::write(&path, &content).await?;

    output::print_notice(
        &Notice::downloaded(&args.file_name, &version.version, &path),
        format,
    );
    Ok(())
}
