//! Request DTOs with validation.

use std::borrow::Cow;

use bytes::Bytes;
use validator::{Validate, ValidationError, ValidationErrors};

use docvault_core::error::AppError;

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn not_empty(value: &Bytes) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("empty")
            .with_message(Cow::Borrowed("Please select a file to upload")));
    }
    Ok(())
}

fn create_has_content(request: &CreateDocument) -> Result<(), ValidationError> {
    not_empty(&request.content)
}

fn revision_has_content(request: &RevisionUpload) -> Result<(), ValidationError> {
    not_empty(&request.content)
}

/// Flatten validation failures into one user-facing message.
///
/// Messages are sorted so the output does not depend on map order.
pub(crate) fn validation_error(errors: &ValidationErrors) -> AppError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })
        })
        .collect();
    messages.sort();
    messages.dedup();
    AppError::validation(messages.join("; "))
}

/// Validate a request, mapping failures to a `Validation` error.
pub(crate) fn check<T: Validate>(request: &T) -> Result<(), AppError> {
    request.validate().map_err(|e| validation_error(&e))
}

/// Upload of a brand-new document.
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "create_has_content", skip_on_field_errors = false))]
pub struct CreateDocument {
    /// File name including extension; becomes the group key.
    #[validate(custom(function = "not_blank", message = "Please enter a filename"))]
    pub file_name: String,
    /// File content; must not be empty.
    pub content: Bytes,
    /// Author of the first version.
    #[validate(custom(function = "not_blank", message = "Please enter author name"))]
    pub author: String,
    /// Comma-separated keywords.
    pub keywords: String,
    /// Note about the upload.
    pub remark: String,
}

/// Upload of a new version of an existing document.
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "revision_has_content", skip_on_field_errors = false))]
pub struct RevisionUpload {
    /// Name of the file the content came from; its extension must match
    /// the document's.
    #[validate(custom(function = "not_blank", message = "Please select a file to upload"))]
    pub source_name: String,
    /// File content; must not be empty.
    pub content: Bytes,
    /// Author of the new version.
    #[validate(custom(function = "not_blank", message = "Please enter author name"))]
    pub author: String,
    /// Comma-separated keywords.
    pub keywords: String,
    /// Note about the change.
    pub remark: String,
}

/// A new version written in the built-in editor.
#[derive(Debug, Clone, Validate)]
pub struct AuthoredRevision {
    /// Plain text of the document body.
    #[validate(custom(function = "not_blank", message = "Document text is empty"))]
    pub text: String,
    /// Author of the new version.
    #[validate(custom(function = "not_blank", message = "Please enter author name"))]
    pub author: String,
    /// Comma-separated keywords.
    pub keywords: String,
    /// Note about the change.
    pub remark: String,
}
