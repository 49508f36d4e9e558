//! Download service.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;

use docvault_catalog::FileCatalog;
use docvault_core::error::AppError;
use docvault_entity::file::FileVersion;
use docvault_gateway::Gateway;

/// Fetches the content of any version in the catalog.
#[derive(Clone)]
pub struct DownloadService {
    catalog: Arc<dyn FileCatalog>,
    gateway: Arc<dyn Gateway>,
}

impl std::fmt::Debug for DownloadService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadService").finish()
    }
}

impl DownloadService {
    /// Creates a new download service.
    pub fn new(catalog: Arc<dyn FileCatalog>, gateway: Arc<dyn Gateway>) -> Self {
        Self { catalog, gateway }
    }

    /// Download one version; the current one when `version_id` is `None`.
    pub async fn download(
        &self,
        file_name: &str,
        version_id: Option<&str>,
    ) -> Result<(FileVersion, Bytes), AppError> {
        let version = match version_id {
            Some(id) => self.catalog.find_version(file_name, id).await?,
            None => self.catalog.current_version(file_name).await?,
        };

        if version.download_link.trim().is_empty() {
            return Err(AppError::version_not_found(format!(
                "Version {} of {file_name} has no download link",
                version.version
            )));
        }

        let content = self.gateway.download(&version.download_link).await?;
        info!(
            file_name,
            version = %version.version,
            bytes = content.len(),
            "Version downloaded"
        );
        Ok((version, content))
    }
}
