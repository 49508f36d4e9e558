//! Viewer launch parameters.

use clap::Args;

use docvault_core::config::AppConfig;
use docvault_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for the view command
#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Document file name
    pub file_name: String,
    /// Version to open; the current one when omitted
    #[arg(short, long)]
    pub version: Option<String>,
}

/// Execute the view command
pub async fn execute(
    args: &ViewArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let registry = super::connect(config).await?;
    let descriptor = registry
        .viewer
        .descriptor(&args.file_name, args.version.as_deref())
        .await?;

    match format {
        OutputFormat::Json => output::print_item(&descriptor, format),
        OutputFormat::Table => {
            output::print_kv("Document server", &descriptor.document_server_url);
            output::print_kv("File type", descriptor.file_type.extension());
            output::print_kv("Document type", descriptor.document_type.as_str());
            output::print_kv("Key", &descriptor.key);
            output::print_kv("Title", &descriptor.title);
            output::print_kv("URL", &descriptor.url);
            output::print_kv("Mode", &descriptor.mode);
            output::print_kv("Language", &descriptor.lang);
            output::print_kv("Callback", &descriptor.callback_url);
        }
    }
    Ok(())
}
