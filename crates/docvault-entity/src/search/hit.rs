//! Search hit returned by the backend index.

use serde::{Deserialize, Serialize};

use crate::file::FileVersion;

/// Marker appended to a truncated preview.
const ELLIPSIS: &str = "...";

/// One ranked match from the search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// When the index last processed the document.
    #[serde(default)]
    pub indexed_at: String,
    /// The matching version.
    pub file_data: FileVersion,
    /// Extracted text content.
    #[serde(default)]
    pub content: String,
}

impl SearchHit {
    /// Preview of the content, at most `max_chars` characters plus `...`.
    pub fn snippet(&self, max_chars: usize) -> String {
        snippet(&self.content, max_chars)
    }
}

/// Truncate `content` to `max_chars` characters, appending `...` when cut.
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
pub fn snippet(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &content[..cut]),
        None => content.to_string(),
    }
}
