//! Content search.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use docvault_core::config::AppConfig;
use docvault_core::error::AppError;
use docvault_service::file::{SearchOutcome, SearchResultView};
use docvault_service::{Notice, ServiceRegistry};

use crate::output::{self, OutputFormat};

/// Arguments for the search command
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Search terms
    pub query: String,
}

/// Search result display row
#[derive(Debug, Serialize, Tabled)]
struct ResultRow {
    /// File name
    file_name: String,
    /// Version
    version: String,
    /// Type
    file_type: String,
    /// Indexed at
    indexed_at: String,
    /// Preview
    snippet: String,
}

impl From<&SearchResultView> for ResultRow {
    fn from(r: &SearchResultView) -> Self {
        Self {
            file_name: r.file_name.clone(),
            version: r.version.clone(),
            file_type: r.file_type.clone(),
            indexed_at: r.indexed_at.clone(),
            snippet: r.snippet.clone(),
        }
    }
}

/// Execute the search command
///
/// Search does not need the catalog, so it skips rehydration.
pub async fn execute(
    args: &SearchArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let registry = ServiceRegistry::from_config(config)?;

    match registry.search.search(&args.query).await? {
        SearchOutcome::Cleared => {
            output::print_notice(&Notice::info("Search", "Enter a search term"), format);
        }
        SearchOutcome::NoResults => output::print_notice(&Notice::no_results(), format),
        SearchOutcome::Hits(results) => {
            let rows: Vec<ResultRow> = results.iter().map(ResultRow::from).collect();
            output::print_list(&rows, format);
            output::print_notice(
                &Notice::search_completed(results.len(), args.query.trim()),
                format,
            );
        }
    }
    Ok(())
}
