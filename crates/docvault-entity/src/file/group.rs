//! File group entity: every version sharing one file name.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::version::FileVersion;

/// A document as presented to the user: the ordered version chain of one
/// file name, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileGroup {
    /// Group key.
    pub file_name: String,
    /// Version chain; index 0 is the current version.
    #[serde(default)]
    pub versions: Vec<FileVersion>,
}

impl FileGroup {
    /// Start a new group from its first version.
    pub fn new(file_name: impl Into<String>, initial: FileVersion) -> Self {
        Self {
            file_name: file_name.into(),
            versions: vec![initial],
        }
    }

    /// The current (newest) version.
    pub fn current(&self) -> Option<&FileVersion> {
        self.versions.first()
    }

    /// Number of versions in the chain.
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Whether the chain is empty. Never true for groups held by a catalog.
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Prepend a new current version.
    pub fn prepend(&mut self, version: FileVersion) {
        self.versions.insert(0, version);
    }

    /// Find the version answering to `version_id`.
    pub fn find_version(&self, version_id: &str) -> Option<&FileVersion> {
        self.versions.iter().find(|v| v.matches_version(version_id))
    }

    /// Lowercase file extension of the group name, if any.
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
            .map(|ext| ext.to_lowercase())
    }

    /// File name with its extension removed.
    pub fn stem(&self) -> &str {
        match self.file_name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => &self.file_name,
        }
    }

    /// Restore newest-first order on a chain received from the backend.
    ///
    /// Sorting only happens when every version carries a readable upload
    /// timestamp; otherwise the received order is trusted. The sort is
    /// stable so equal timestamps keep their relative order.
    pub fn normalize_order(&mut self) {
        let stamps: Option<Vec<_>> = self.versions.iter().map(|v| v.uploaded_at()).collect();
        if stamps.is_none() {
            return;
        }
        self.versions.sort_by_key(|v| Reverse(v.uploaded_at()));
    }
}
