//! User-facing notices and the error translation layer.
//!
//! Every action ends in exactly one notice. Failures are never fatal: they
//! are logged and turned into an error notice by [`notice_for`], which is
//! the only place that knows how an error kind reads to a user.

use std::future::Future;

use serde::Serialize;
use tracing::warn;

use docvault_core::error::{AppError, ErrorKind};
use docvault_entity::file::FileVersion;

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral information.
    Info,
    /// The action completed.
    Success,
    /// The action failed; state was left unchanged.
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Short headline.
    pub title: String,
    /// Detail line.
    pub description: String,
    /// Presentation hint.
    pub severity: Severity,
}

impl Notice {
    fn new(title: impl Into<String>, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }

    /// An informational notice.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Info)
    }

    /// A success notice.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Success)
    }

    /// An error notice.
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Error)
    }

    /// A new document was uploaded.
    pub fn file_created(version: &FileVersion) -> Self {
        Self::success(
            "File Created",
            format!(
                "{} v{} has been created successfully",
                version.file_name, version.version
            ),
        )
    }

    /// A new version was uploaded from a file.
    pub fn file_updated(file_name: &str, version: &FileVersion) -> Self {
        Self::success(
            "File Updated",
            format!("{file_name} v{} uploaded successfully", version.version),
        )
    }

    /// A new version was written in the editor.
    pub fn version_authored(file_name: &str, version: &FileVersion) -> Self {
        Self::success(
            "New Version Created",
            format!("{file_name} v{} saved successfully", version.version),
        )
    }

    /// A search returned results.
    pub fn search_completed(count: usize, query: &str) -> Self {
        Self::success(
            "Search Completed",
            format!("Found {count} results for \"{query}\""),
        )
    }

    /// A search returned nothing.
    pub fn no_results() -> Self {
        Self::info("No Results", "No results found. Try different search terms.")
    }

    /// Content was downloaded.
    pub fn downloaded(file_name: &str, version: &str, path: &str) -> Self {
        Self::success(
            "Download Complete",
            format!("Downloaded {file_name} {version} to {path}"),
        )
    }
}

/// Translate an error into the notice the user sees.
pub fn notice_for(err: &AppError) -> Notice {
    let title = match err.kind {
        ErrorKind::InvalidVersionFormat => "Invalid Version Format",
        ErrorKind::DuplicateFileName => "Duplicate File Name",
        ErrorKind::GroupNotFound => "File Not Found",
        ErrorKind::VersionNotFound => "Version Not Found",
        ErrorKind::UploadFailed => "Upload Failed",
        ErrorKind::SearchFailed => "Search Failed",
        ErrorKind::NetworkError => "Network Error",
        ErrorKind::Validation => "Error",
        ErrorKind::Conflict => "Version Conflict",
        ErrorKind::Configuration => "Configuration Error",
        ErrorKind::Serialization | ErrorKind::Io | ErrorKind::Internal => "Error",
    };

    let description = match err.kind {
        ErrorKind::Serialization | ErrorKind::Internal => "Something went wrong".to_string(),
        _ if err.message.trim().is_empty() => "Something went wrong".to_string(),
        _ => err.message.clone(),
    };

    Notice::error(title, description)
}

/// Run one user action, translating any failure into a notice.
///
/// The failure is logged with its kind before translation so the detail is
/// not lost when the description is generic.
pub async fn guard<T, F>(action: &str, fut: F) -> Result<T, Notice>
where
    F: Future<Output = Result<T, AppError>>,
{
    fut.await.map_err(|err| {
        warn!(action, kind = %err.kind, error = %err, "Action failed");
        notice_for(&err)
    })
}
