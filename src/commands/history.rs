//! Version history of one document.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use docvault_core::config::AppConfig;
use docvault_core::error::AppError;
use docvault_entity::file::FileVersion;

use crate::output::{self, OutputFormat};

/// Arguments for the history command
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Document file name
    pub file_name: String,
}

/// Version display row
#[derive(Debug, Serialize, Tabled)]
struct VersionRow {
    /// Version
    version: String,
    /// Author
    author: String,
    /// Uploaded on
    uploaded_on: String,
    /// Keywords
    keywords: String,
    /// Remark
    remark: String,
}

impl From<&FileVersion> for VersionRow {
    fn from(v: &FileVersion) -> Self {
        Self {
            version: v.version.clone(),
            author: v.author.clone(),
            uploaded_on: super::display_time(v),
            keywords: v.keyword_list().join(", "),
            remark: v.remark.clone(),
        }
    }
}

/// Execute the history command
pub async fn execute(
    args: &HistoryArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let registry = super::connect(config).await?;
    let group = registry.catalog.history(&args.file_name).await?;

    if format == OutputFormat::Table {
        output::print_kv("Document", &group.file_name);
        output::print_kv("Versions", &group.len().to_string());
    }
    let rows: Vec<VersionRow> = group.versions.iter().map(VersionRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}
