//! In-memory catalog implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use docvault_core::error::AppError;
use docvault_core::result::AppResult;
use docvault_entity::file::{FileGroup, FileVersion};

use crate::traits::FileCatalog;

/// Catalog held in process memory.
///
/// Groups are kept in a `Vec` so the presentation order (newest created
/// first) survives; catalogs are small enough that linear lookup is fine.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    groups: Arc<RwLock<Vec<FileGroup>>>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }
}

fn group_not_found(file_name: &str) -> AppError {
    AppError::group_not_found(format!("File {file_name} not found"))
}

/// Fold backend groups into a clean list: blank names and empty chains are
/// dropped, groups sharing a name are merged, and each chain is put back
/// into newest-first order.
fn normalize(groups: Vec<FileGroup>) -> Vec<FileGroup> {
    let mut merged: Vec<FileGroup> = Vec::with_capacity(groups.len());

    for group in groups {
        if group.file_name.trim().is_empty() {
            warn!("Dropping file group with blank name");
            continue;
        }
        if group.is_empty() {
            warn!(file_name = %group.file_name, "Dropping file group without versions");
            continue;
        }

        match merged.iter_mut().find(|g| g.file_name == group.file_name) {
            Some(existing) => {
                warn!(file_name = %group.file_name, "Merging duplicate file group");
                existing.versions.extend(group.versions);
            }
            None => merged.push(group),
        }
    }

    for group in &mut merged {
        group.normalize_order();
    }
    merged
}

#[async_trait]
impl FileCatalog for MemoryCatalog {
    async fn list_groups(&self) -> Vec<FileGroup> {
        self.groups.read().await.clone()
    }

    async fn get_group(&self, file_name: &str) -> AppResult<FileGroup> {
        self.groups
            .read()
            .await
            .iter()
            .find(|g| g.file_name == file_name)
            .cloned()
            .ok_or_else(|| group_not_found(file_name))
    }

    async fn create_group(&self, file_name: &str, initial: FileVersion) -> AppResult<FileGroup> {
        if file_name.trim().is_empty() {
            return Err(AppError::validation("Please enter a filename"));
        }

        let mut groups = self.groups.write().await;
        if groups.iter().any(|g| g.file_name == file_name) {
            return Err(AppError::duplicate_file_name(format!(
                "A file named {file_name} already exists"
            )));
        }

        let group = FileGroup::new(file_name, initial);
        groups.insert(0, group.clone());
        debug!(file_name, "File group created");
        Ok(group)
    }

    async fn append_version(
        &self,
        file_name: &str,
        version: FileVersion,
    ) -> AppResult<FileGroup> {
        let mut groups = self.groups.write().await;
        let group = groups
            .iter_mut()
            .find(|g| g.file_name == file_name)
            .ok_or_else(|| group_not_found(file_name))?;

        debug!(file_name, version = %version.version, "Version appended");
        group.prepend(version);
        Ok(group.clone())
    }

    async fn append_version_if_current(
        &self,
        file_name: &str,
        expected_head: &str,
        version: FileVersion,
    ) -> AppResult<FileGroup> {
        let mut groups = self.groups.write().await;
        let group = groups
            .iter_mut()
            .find(|g| g.file_name == file_name)
            .ok_or_else(|| group_not_found(file_name))?;

        let head = group.current().map(|v| v.version.as_str()).unwrap_or_default();
        if head != expected_head {
            warn!(
                file_name,
                expected = expected_head,
                actual = head,
                "Rejected append on stale head"
            );
            return Err(AppError::conflict(format!(
                "{file_name} changed to version {head} while you were editing version \
                 {expected_head}; reload and try again"
            )));
        }

        debug!(file_name, version = %version.version, "Version appended");
        group.prepend(version);
        Ok(group.clone())
    }

    async fn find_version(&self, file_name: &str, version_id: &str) -> AppResult<FileVersion> {
        let groups = self.groups.read().await;
        let group = groups
            .iter()
            .find(|g| g.file_name == file_name)
            .ok_or_else(|| group_not_found(file_name))?;

        group.find_version(version_id).cloned().ok_or_else(|| {
            AppError::version_not_found(format!(
                "Version {version_id} not found for {file_name}"
            ))
        })
    }

    async fn current_version(&self, file_name: &str) -> AppResult<FileVersion> {
        let groups = self.groups.read().await;
        let group = groups
            .iter()
            .find(|g| g.file_name == file_name)
            .ok_or_else(|| group_not_found(file_name))?;

        group.current().cloned().ok_or_else(|| {
            AppError::version_not_found(format!("{file_name} has no versions"))
        })
    }

    async fn replace_all(&self, groups: Vec<FileGroup>) -> usize {
        let normalized = normalize(groups);
        let count = normalized.len();
        *self.groups.write().await = normalized;
        debug!(count, "Catalog replaced");
        count
    }

    async fn group_count(&self) -> usize {
        self.groups.read().await.len()
    }
}
