//! New document upload.

use clap::Args;

use docvault_core::config::AppConfig;
use docvault_core::error::AppError;
use docvault_service::{CreateDocument, Notice};

use crate::output::{self, OutputFormat};

/// Arguments for the create command
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Path of the file to upload
    pub path: String,
    /// Document name; defaults to the file's own name
    #[arg(short, long)]
    pub name: Option<String>,
    /// Author name
    #[arg(short, long)]
    pub author: String,
    /// Comma-separated keywords
    #[arg(short, long, default_value = "")]
    pub keywords: String,
    /// Note about the document
    #[arg(short, long, default_value = "")]
    pub remark: String,
}

/// Execute the create command
pub async fn execute(
    args: &CreateArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let registry = super::connect(config).await?;
    let content = super::read_input(&args.path).await?;
    let file_name = args
        .name
        .clone()
        .unwrap_or_else(|| super::file_name_of(&args.path));

    let version = registry
        .upload
        .create_document(CreateDocument {
            file_name,
            content,
            author: args.author.clone(),
            keywords: args.keywords.clone(),
            remark: args.remark.clone(),
        })
        .await?;

    output::print_notice(&Notice::file_created(&version), format);
    Ok(())
}
