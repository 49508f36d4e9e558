//! File version entity.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use docvault_core::error::AppError;

use crate::version::VersionNumber;

/// One uploaded artifact of a document at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileVersion {
    /// Display name; also the key of the owning file group.
    pub file_name: String,
    /// Version identifier, conventionally `MAJOR.MINOR`.
    pub version: String,
    /// Opaque URI the content can be fetched from.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub download_link: String,
    /// ISO-8601 upload timestamp as sent by the backend.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub uploaded_on: String,
    /// Author of this version.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    /// Comma-separated keywords.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keywords: String,
    /// Free-text note about the change.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub remark: String,
}

/// Read `null` the same as a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl FileVersion {
    /// Parse the version identifier.
    pub fn version_number(&self) -> Result<VersionNumber, AppError> {
        VersionNumber::parse(&self.version)
    }

    /// Whether this version answers to `version_id`.
    ///
    /// Identifiers compare by value when both parse (`v1.0` matches `1.0`),
    /// otherwise by exact string.
    pub fn matches_version(&self, version_id: &str) -> bool {
        match (
            VersionNumber::parse(&self.version),
            VersionNumber::parse(version_id),
        ) {
            (Ok(own), Ok(wanted)) => own == wanted,
            _ => self.version == version_id,
        }
    }

    /// Upload timestamp, if the backend sent one we can read.
    ///
    /// Accepts RFC 3339 and offset-less `YYYY-MM-DDTHH:MM:SS[.fff]`, the
    /// latter interpreted as UTC.
    pub fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.uploaded_on.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// Keywords split on commas, trimmed, blanks dropped.
    pub fn keyword_list(&self) -> Vec<&str> {
        self.keywords
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .collect()
    }
}
