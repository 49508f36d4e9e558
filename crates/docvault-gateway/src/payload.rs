//! Multipart upload payload.

use bytes::Bytes;
use chrono::Utc;

use docvault_entity::file::FileVersion;

/// One version upload: binary content plus its metadata fields.
#[derive(Debug, Clone)]
pub struct UploadPayload {
    /// Display name including extension; also the multipart part file name.
    pub file_name: String,
    /// File content.
    pub content: Bytes,
    /// Content MIME type.
    pub mime_type: String,
    /// Author of this version.
    pub author: String,
    /// Note about the change.
    pub remark: String,
    /// Version identifier being uploaded.
    pub version: String,
    /// Comma-separated keywords.
    pub keywords: String,
}

impl UploadPayload {
    /// Create a payload, guessing the MIME type from the file name.
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .to_string();
        Self {
            file_name,
            content: content.into(),
            mime_type,
            author: String::new(),
            remark: String::new(),
            version: String::new(),
            keywords: String::new(),
        }
    }

    /// Set the author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the remark.
    pub fn remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = remark.into();
        self
    }

    /// Set the version identifier.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the keywords.
    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }

    /// Override the MIME type.
    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// Value of the `filename` form field: the name without its extension.
    pub fn filename_field(&self) -> &str {
        match self.file_name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => &self.file_name,
        }
    }

    /// The version record implied by this upload, for backends that do not
    /// echo one back.
    pub fn to_version(&self) -> FileVersion {
        FileVersion {
            file_name: self.file_name.clone(),
            version: self.version.clone(),
            download_link: format!("/uploads/{}", self.file_name),
            uploaded_on: Utc::now().to_rfc3339(),
            author: self.author.clone(),
            keywords: self.keywords.clone(),
            remark: self.remark.clone(),
        }
    }
}
