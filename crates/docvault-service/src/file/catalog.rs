//! Catalog service: session rehydration and read-only catalog views.

use std::sync::Arc;

use tracing::info;

use docvault_catalog::FileCatalog;
use docvault_core::error::AppError;
use docvault_entity::file::{FileGroup, FileVersion};
use docvault_gateway::Gateway;

/// Keeps the session catalog in step with the backend and answers lookups.
#[derive(Clone)]
pub struct CatalogService {
    /// Session catalog.
    catalog: Arc<dyn FileCatalog>,
    /// Backend gateway.
    gateway: Arc<dyn Gateway>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService").finish()
    }
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(catalog: Arc<dyn FileCatalog>, gateway: Arc<dyn Gateway>) -> Self {
        Self { catalog, gateway }
    }

    /// Reload the catalog from the backend. Returns the number of groups.
    ///
    /// On failure the catalog is left as it was.
    pub async fn rehydrate(&self) -> Result<usize, AppError> {
        let groups = self.gateway.list_all_files().await?;
        let count = self.catalog.replace_all(groups).await;
        info!(count, "Catalog rehydrated");
        Ok(count)
    }

    /// All documents, most recently created first.
    pub async fn list_documents(&self) -> Vec<FileGroup> {
        self.catalog.list_groups().await
    }

    /// One document with its full version chain.
    pub async fn history(&self, file_name: &str) -> Result<FileGroup, AppError> {
        self.catalog.get_group(file_name).await
    }

    /// One version of a document; the current one when `version_id` is `None`.
    pub async fn find_version(
        &self,
        file_name: &str,
        version_id: Option<&str>,
    ) -> Result<FileVersion, AppError> {
        match version_id {
            Some(id) => self.catalog.find_version(file_name, id).await,
            None => self.catalog.current_version(file_name).await,
        }
    }
}
