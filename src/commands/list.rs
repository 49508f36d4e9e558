//! Document listing.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use docvault_core::config::AppConfig;
use docvault_core::error::AppError;
use docvault_entity::file::FileGroup;

use crate::output::{self, OutputFormat};

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show documents whose name contains this text
    #[arg(short, long)]
    pub filter: Option<String>,
}

/// Document display row
#[derive(Debug, Serialize, Tabled)]
pub struct DocumentRow {
    /// File name
    pub file_name: String,
    /// Current version
    pub version: String,
    /// Number of versions
    pub versions: usize,
    /// Author of the current version
    pub author: String,
    /// Upload time of the current version
    pub uploaded_on: String,
}

impl From<&FileGroup> for DocumentRow {
    fn from(group: &FileGroup) -> Self {
        let current = group.current();
        Self {
            file_name: group.file_name.clone(),
            version: current.map(|v| v.version.clone()).unwrap_or_default(),
            versions: group.len(),
            author: current.map(|v| v.author.clone()).unwrap_or_default(),
            uploaded_on: current.map(super::display_time).unwrap_or_default(),
        }
    }
}

/// Execute the list command
pub async fn execute(
    args: &ListArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let registry = super::connect(config).await?;
    let needle = args.filter.as_deref().map(str::to_lowercase);

    let rows: Vec<DocumentRow> = registry
        .catalog
        .list_documents()
        .await
        .iter()
        .filter(|g| {
            needle
                .as_deref()
                .is_none_or(|n| g.file_name.to_lowercase().contains(n))
        })
        .map(DocumentRow::from)
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
