//! # docvault-service
//!
//! Use-case layer for DocVault. Each service orchestrates the in-memory
//! catalog and the backend gateway to implement one user action; every
//! failure is translated into a [`Notice`] by a single function,
//! [`notice::notice_for`].
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod file;
pub mod notice;
pub mod registry;
pub mod request;

#[cfg(test)]
pub(crate) mod testing;

pub use file::{
    AuthoringService, CatalogService, DownloadService, SearchService, UploadService, ViewerService,
};
pub use notice::{Notice, Severity, notice_for};
pub use registry::ServiceRegistry;
pub use request::{AuthoredRevision, CreateDocument, RevisionUpload};
