//! Ingress normalization of backend response bodies.
//!
//! The backend is loosely typed. Anything that is not a JSON array where an
//! array is expected becomes an empty list, and array elements that do not
//! fit the schema are skipped with a warning.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use docvault_entity::file::{FileGroup, FileVersion};
use docvault_entity::search::SearchHit;

/// The elements of a JSON array body, or nothing for any other body.
fn json_array(body: &[u8], what: &str) -> Vec<Value> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Array(items)) => items,
        Ok(other) => {
            warn!(kind = what, got = json_type(&other), "Expected a JSON array");
            Vec::new()
        }
        Err(e) => {
            warn!(kind = what, error = %e, "Response body is not JSON");
            Vec::new()
        }
    }
}

/// Decode each element as `T`, skipping the ones that do not fit.
fn decode_each<T: DeserializeOwned>(items: Vec<Value>, what: &str) -> Vec<T> {
    let total = items.len();
    let decoded: Vec<T> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<T>(item) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(kind = what, error = %e, "Skipping malformed element");
                None
            }
        })
        .collect();

    if decoded.len() != total {
        warn!(kind = what, total, kept = decoded.len(), "Dropped malformed elements");
    }
    decoded
}

/// Decode one file group, keeping the versions that parse.
fn file_group(item: Value) -> Option<FileGroup> {
    let mut fields = match item {
        Value::Object(fields) => fields,
        other => {
            warn!(kind = "file_group", got = json_type(&other), "Skipping malformed element");
            return None;
        }
    };
    let Some(Value::String(file_name)) = fields.remove("fileName") else {
        warn!(kind = "file_group", "Skipping group without a file name");
        return None;
    };
    let versions = match fields.remove("versions") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => decode_each(items, "file_version"),
        Some(other) => {
            warn!(
                kind = "file_group",
                file_name = %file_name,
                got = json_type(&other),
                "Skipping group with malformed versions"
            );
            return None;
        }
    };
    Some(FileGroup {
        file_name,
        versions,
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decode the file-list response.
pub fn file_groups(body: &[u8]) -> Vec<FileGroup> {
    json_array(body, "file_group")
        .into_iter()
        .filter_map(file_group)
        .collect()
}

/// Decode the search response.
pub fn search_hits(body: &[u8]) -> Vec<SearchHit> {
    decode_each(json_array(body, "search_hit"), "search_hit")
}

/// Decode an upload response, if the backend echoed a version record.
pub fn uploaded_version(body: &[u8]) -> Option<FileVersion> {
    serde_json::from_slice::<FileVersion>(body).ok()
}

/// The `message` field of an error body, if there is a non-blank one.
pub fn error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
