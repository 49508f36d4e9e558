//! CLI command definitions and dispatch.

pub mod author;
pub mod config;
pub mod create;
pub mod download;
pub mod history;
pub mod list;
pub mod search;
pub mod upload;
pub mod view;

use bytes::Bytes;
use clap::{Parser, Subcommand};

use docvault_core::config::AppConfig;
use docvault_core::error::AppError;
use docvault_entity::file::FileVersion;
use docvault_service::ServiceRegistry;

use crate::output::OutputFormat;

/// DocVault: document management with linear version history
#[derive(Debug, Parser)]
#[command(name = "docvault", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List documents with their current version
    List(list::ListArgs),
    /// Show the version history of a document
    History(history::HistoryArgs),
    /// Upload a new document as version 1.0
    Create(create::CreateArgs),
    /// Upload a file as the next version of a document
    Upload(upload::UploadArgs),
    /// Write the next version of a Word document from text
    Author(author::AuthorArgs),
    /// Search document content
    Search(search::SearchArgs),
    /// Download a version of a document
    Download(download::DownloadArgs),
    /// Show viewer launch parameters for a version
    View(view::ViewArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Commands {
    /// Action name used in logs.
    pub fn action(&self) -> &'static str {
        match self {
            Self::List(_) => "list",
            Self::History(_) => "history",
            Self::Create(_) => "create",
            Self::Upload(_) => "upload",
            Self::Author(_) => "author",
            Self::Search(_) => "search",
            Self::Download(_) => "download",
            Self::View(_) => "view",
            Self::Config(_) => "config",
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::List(args) => list::execute(args, config, self.format).await,
            Commands::History(args) => history::execute(args, config, self.format).await,
            Commands::Create(args) => create::execute(args, config, self.format).await,
            Commands::Upload(args) => upload::execute(args, config, self.format).await,
            Commands::Author(args) => author::execute(args, config, self.format).await,
            Commands::Search(args) => search::execute(args, config, self.format).await,
            Commands::Download(args) => download::execute(args, config, self.format).await,
            Commands::View(args) => view::execute(args, config, self.format).await,
            Commands::Config(args) => {
                config::execute(args, &self.config, config, self.format).await
            }
        }
    }
}

/// Helper: build the services and load the catalog from the backend
pub async fn connect(config: AppConfig) -> Result<ServiceRegistry, AppError> {
    let registry = ServiceRegistry::from_config(config)?;
    registry.catalog.rehydrate().await?;
    Ok(registry)
}

/// Helper: read a file given on the command line
pub async fn read_input(path: &str) -> Result<Bytes, AppError> {
    let content = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::validation(format!("Cannot read '{path}': {e}")))?;
    Ok(Bytes::from(content))
}

/// Helper: the final path component, used as the default document name
pub fn file_name_of(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Helper: upload time for display, raw when it cannot be parsed
pub fn display_time(version: &FileVersion) -> String {
    match version.uploaded_at() {
        Some(at) => at.format("%Y-%m-%d %H:%M").to_string(),
        None => version.uploaded_on.clone(),
    }
}
