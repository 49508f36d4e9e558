//! New version from a file.

use clap::Args;

use docvault_core::config::AppConfig;
use docvault_core::error::AppError;
use docvault_service::{Notice, RevisionUpload};

use crate::output::{self, OutputFormat};

/// Arguments for the upload command
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Document file name
    pub file_name: String,
    /// Path of the new content; must have the document's extension
    pub path: String,
    /// Author name
    #[arg(short, long)]
    pub author: String,
    /// Comma-separated keywords
    #[arg(short, long, default_value = "")]
    pub keywords: String,
    /// Note about the change
    #[arg(short, long, default_value = "")]
    pub remark: String,
}

/// Execute the upload command
pub async fn execute(
    args: &UploadArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let registry = super::connect(config).await?;
    let content = super::read_input(&args.path).await?;

    let version = registry
        .upload
        .upload_revision(
            &args.file_name,
            RevisionUpload {
                source_name: super::file_name_of(&args.path),
                content,
                author: args.author.clone(),
                keywords: args.keywords.clone(),
                remark: args.remark.clone(),
            },
        )
        .await?;

    output::print_notice(&Notice::file_updated(&args.file_name, &version), format);
    Ok(())
}
