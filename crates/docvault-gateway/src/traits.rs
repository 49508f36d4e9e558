//! Gateway trait for the document backend.

use async_trait::async_trait;
use bytes::Bytes;

use docvault_core::result::AppResult;
use docvault_entity::file::{FileGroup, FileVersion};
use docvault_entity::search::SearchHit;

use crate::payload::UploadPayload;

/// Operations the backend provides.
#[async_trait]
pub trait Gateway: Send + Sync + 'static {
    /// Every file group known to the backend. A malformed response yields
    /// an empty list rather than an error.
    async fn list_all_files(&self) -> AppResult<Vec<FileGroup>>;

    /// Upload one version. Fails with `UploadFailed` when the backend
    /// rejects it.
    async fn create_file(&self, payload: UploadPayload) -> AppResult<FileVersion>;

    /// Full-text search. An empty list is a valid answer.
    async fn search_content(&self, query: &str) -> AppResult<Vec<SearchHit>>;

    /// Fetch the content behind a version's download link.
    async fn download(&self, link: &str) -> AppResult<Bytes>;
}
