//! Service registry shared by every command.

use std::sync::Arc;

use docvault_catalog::{FileCatalog, MemoryCatalog};
use docvault_core::config::AppConfig;
use docvault_core::error::AppError;
use docvault_gateway::{Gateway, HttpGateway};

use crate::file::{
    AuthoringService, CatalogService, DownloadService, SearchService, UploadService, ViewerService,
};

/// Every service, wired to one catalog and one gateway.
///
/// All fields are cheap to clone.
#[derive(Debug, Clone)]
pub struct ServiceRegistry {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Catalog sync and lookups
    pub catalog: CatalogService,
    /// New documents and file revisions
    pub upload: UploadService,
    /// Editor-authored revisions
    pub authoring: AuthoringService,
    /// Content search
    pub search: SearchService,
    /// Version downloads
    pub download: DownloadService,
    /// Viewer launch parameters
    pub viewer: ViewerService,
}

impl ServiceRegistry {
    /// Wire services to an existing catalog and gateway.
    pub fn new(
        config: AppConfig,
        catalog: Arc<dyn FileCatalog>,
        gateway: Arc<dyn Gateway>,
    ) -> Self {
        let upload = UploadService::new(Arc::clone(&catalog), Arc::clone(&gateway));
        Self {
            catalog: CatalogService::new(Arc::clone(&catalog), Arc::clone(&gateway)),
            authoring: AuthoringService::new(upload.clone()),
            upload,
            search: SearchService::new(Arc::clone(&gateway), config.search.clone()),
            download: DownloadService::new(Arc::clone(&catalog), gateway),
            viewer: ViewerService::new(catalog, config.viewer.clone()),
            config: Arc::new(config),
        }
    }

    /// Build the production stack: an empty session catalog and the HTTP
    /// gateway described by `config`.
    pub fn from_config(config: AppConfig) -> Result<Self, AppError> {
        config.validate()?;
        let gateway = HttpGateway::new(&config.gateway)?;
        Ok(Self::new(
            config,
            Arc::new(MemoryCatalog::new()),
            Arc::new(gateway),
        ))
    }
}
