//! Catalog trait implemented by catalog backends.

use async_trait::async_trait;

use docvault_core::result::AppResult;
use docvault_entity::file::{FileGroup, FileVersion};

/// Repository of file groups keyed by file name.
///
/// Mutations never remove or rewrite an existing version; they only add
/// groups or prepend versions.
#[async_trait]
pub trait FileCatalog: Send + Sync + 'static {
    /// All groups, most recently created first.
    async fn list_groups(&self) -> Vec<FileGroup>;

    /// Look up one group.
    async fn get_group(&self, file_name: &str) -> AppResult<FileGroup>;

    /// Create a group from its first version.
    ///
    /// Fails with `DuplicateFileName` if the name is taken.
    async fn create_group(&self, file_name: &str, initial: FileVersion) -> AppResult<FileGroup>;

    /// Prepend `version` to an existing group and return the updated group.
    ///
    /// Fails with `GroupNotFound` if no such group exists.
    async fn append_version(&self, file_name: &str, version: FileVersion)
    -> AppResult<FileGroup>;

    /// Like [`FileCatalog::append_version`], but only if the current head is
    /// still `expected_head`. Fails with `Conflict` otherwise.
    async fn append_version_if_current(
        &self,
        file_name: &str,
        expected_head: &str,
        version: FileVersion,
    ) -> AppResult<FileGroup>;

    /// Find one version of a group.
    ///
    /// Fails with `GroupNotFound` or `VersionNotFound`.
    async fn find_version(&self, file_name: &str, version_id: &str) -> AppResult<FileVersion>;

    /// The current version of a group.
    async fn current_version(&self, file_name: &str) -> AppResult<FileVersion>;

    /// Replace the whole catalog with groups fetched from the backend.
    /// Returns the number of groups held afterwards.
    async fn replace_all(&self, groups: Vec<FileGroup>) -> usize;

    /// Number of groups held.
    async fn group_count(&self) -> usize;
}
