//! New Word version written from text.

use clap::Args;

use docvault_core::config::AppConfig;
use docvault_core::error::AppError;
use docvault_service::{AuthoredRevision, Notice};

use crate::output::{self, OutputFormat};

/// Arguments for the author command
#[derive(Debug, Args)]
pub struct AuthorArgs {
    /// Document file name (.docx)
    pub file_name: String,
    /// Document text; one paragraph per line
    #[arg(short, long, conflicts_with = "text_file", required_unless_present = "text_file")]
    pub text: Option<String>,
    /// Read the document text from a file
    #[arg(long)]
    pub text_file: Option<String>,
    /// Author name
    #[arg(short, long)]
    pub author: String,
    /// Comma-separated keywords
    #[arg(short, long, default_value = "")]
    pub keywords: String,
    /// Note about the change
    #[arg(short, long, default_value = "Edited in app")]
    pub remark: String,
}

/// Execute the author command
pub async fn execute(
    args: &AuthorArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let text = match (&args.text, &args.text_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::validation(format!("Cannot read '{path}': {e}")))?,
        (None, None) => String::new(),
    };

    let registry = super::connect(config).await?;
    let version = registry
        .authoring
        .author_revision(
            &args.file_name,
            AuthoredRevision {
                text,
                author: args.author.clone(),
                keywords: args.keywords.clone(),
                remark: args.remark.clone(),
            },
        )
        .await?;

    output::print_notice(&Notice::version_authored(&args.file_name, &version), format);
    Ok(())
}
