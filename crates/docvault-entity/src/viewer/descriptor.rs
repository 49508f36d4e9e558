//! Launch parameters for the external document viewer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::document_type::{DocumentType, ViewerFileType, ViewerFormat};
use crate::file::FileVersion;

/// Everything the document server needs to open one version read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerDescriptor {
    /// Document server root URL.
    pub document_server_url: String,
    /// Normalized file type.
    pub file_type: ViewerFileType,
    /// Document family.
    pub document_type: DocumentType,
    /// Cache key; unique per launch.
    pub key: String,
    /// Title shown in the viewer chrome.
    pub title: String,
    /// Where the viewer fetches the content.
    pub url: String,
    /// Editor mode; always `view`.
    pub mode: String,
    /// UI language.
    pub lang: String,
    /// Callback URL for the document server.
    pub callback_url: String,
}

impl ViewerDescriptor {
    /// Build a view-mode descriptor for `version`, opened at `now`.
    pub fn for_version(
        version: &FileVersion,
        document_server_url: &str,
        callback_url: &str,
        lang: &str,
        now: DateTime<Utc>,
    ) -> Self {
        let format = ViewerFormat::from_link(&version.download_link);
        Self {
            document_server_url: document_server_url.to_string(),
            file_type: format.file_type,
            document_type: format.document_type,
            key: format!("task-{}-{}", format.file_type, now.timestamp_millis()),
            title: format!("Task Document.{}", format.file_type),
            url: version.download_link.clone(),
            mode: "view".to_string(),
            lang: lang.to_string(),
            callback_url: callback_url.to_string(),
        }
    }
}
