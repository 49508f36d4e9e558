//! Unified application error types for DocVault.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. The service layer turns an
//! `AppError` into a user-facing notice at the action boundary.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A version string did not match `v?MAJOR.MINOR[.PATCH]`.
    InvalidVersionFormat,
    /// A file group with the same name already exists.
    DuplicateFileName,
    /// No file group exists for the given name.
    GroupNotFound,
    /// The file group exists but has no such version.
    VersionNotFound,
    /// The backend rejected an upload.
    UploadFailed,
    /// The backend failed to answer a search.
    SearchFailed,
    /// Transport-level failure talking to the backend.
    NetworkError,
    /// Input validation failed.
    Validation,
    /// The catalog changed underneath an in-progress edit.
    Conflict,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// A local I/O error occurred.
    Io,
    /// An internal error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVersionFormat => write!(f, "INVALID_VERSION_FORMAT"),
            Self::DuplicateFileName => write!(f, "DUPLICATE_FILE_NAME"),
            Self::GroupNotFound => write!(f, "GROUP_NOT_FOUND"),
            Self::VersionNotFound => write!(f, "VERSION_NOT_FOUND"),
            Self::UploadFailed => write!(f, "UPLOAD_FAILED"),
            Self::SearchFailed => write!(f, "SEARCH_FAILED"),
            Self::NetworkError => write!(f, "NETWORK_ERROR"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Io => write!(f, "IO"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout DocVault.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-version-format error.
    pub fn invalid_version_format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidVersionFormat, message)
    }

    /// Create a duplicate-file-name error.
    pub fn duplicate_file_name(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateFileName, message)
    }

    /// Create a group-not-found error.
    pub fn group_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::GroupNotFound, message)
    }

    /// Create a version-not-found error.
    pub fn version_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::VersionNotFound, message)
    }

    /// Create an upload-failed error.
    pub fn upload_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UploadFailed, message)
    }

    /// Create a search-failed error.
    pub fn search_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SearchFailed, message)
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NetworkError, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Returns `true` if the error is of the given kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Io, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
