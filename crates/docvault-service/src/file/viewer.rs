//! Viewer service: launch parameters for the external document server.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use docvault_catalog::FileCatalog;
use docvault_core::config::viewer::ViewerConfig;
use docvault_core::error::AppError;
use docvault_entity::viewer::ViewerDescriptor;

/// Builds viewer descriptors for catalog versions.
#[derive(Clone)]
pub struct ViewerService {
    catalog: Arc<dyn FileCatalog>,
    config: ViewerConfig,
}

impl std::fmt::Debug for ViewerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewerService")
            .field("config", &self.config)
            .finish()
    }
}

impl ViewerService {
    /// Creates a new viewer service.
    pub fn new(catalog: Arc<dyn FileCatalog>, config: ViewerConfig) -> Self {
        Self { catalog, config }
    }

    /// Read-only viewer launch parameters for one version.
    ///
    /// The file type comes from the download link, not the group name, so a
    /// version stored under a different extension still opens correctly.
    pub async fn descriptor(
        &self,
        file_name: &str,
        version_id: Option<&str>,
    ) -> Result<ViewerDescriptor, AppError> {
        let version = match version_id {
            Some(id) => self.catalog.find_version(file_name, id).await?,
            None => self.catalog.current_version(file_name).await?,
        };

        let descriptor = ViewerDescriptor::for_version(
            &version,
            &self.config.document_server_url,
            &self.config.callback_url,
            &self.config.lang,
            Utc::now(),
        );
        debug!(
            file_name,
            version = %version.version,
            file_type = %descriptor.file_type,
            "Viewer descriptor built"
        );
        Ok(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use docvault_core::error::ErrorKind;
    use docvault_entity::file::FileGroup;
    use docvault_entity::viewer::{DocumentType, ViewerFileType};

    use super::*;
    use crate::testing::{seeded, version};

    #[tokio::test]
    async fn test_presentation_descriptor() {
        let (catalog, _) =
            seeded(vec![FileGroup::new("deck.pptx", version("deck.pptx", "1.0"))]).await;
        let service = ViewerService::new(catalog, ViewerConfig::default());

        let d = service.descriptor("deck.pptx", None).await.expect("descriptor");
        assert_eq!(d.file_type, ViewerFileType::Pptx);
        assert_eq!(d.document_type, DocumentType::Slide);
        assert_eq!(d.url, "http://docs.local/uploads/deck.pptx");
        assert_eq!(d.document_server_url, "http://localhost:8081/");
        assert!(d.key.starts_with("task-pptx-"));
    }

    #[tokio::test]
    async fn test_unknown_extension_defaults_to_word() {
        let mut v = version("notes.md", "1.0");
        v.download_link = "http://docs.local/uploads/notes.md".to_string();
        let (catalog, _) = seeded(vec![FileGroup::new("notes.md", v)]).await;
        let service = ViewerService::new(catalog, ViewerConfig::default());

        let d = service.descriptor("notes.md", Some("1.0")).await.expect("descriptor");
        assert_eq!(d.file_type, ViewerFileType::Docx);
        assert_eq!(d.document_type, DocumentType::Word);
    }

    #[tokio::test]
    async fn test_unknown_document() {
        let (catalog, _) = seeded(Vec::new()).await;
        let service = ViewerService::new(catalog, ViewerConfig::default());

        let err = service.descriptor("ghost.pdf", None).await.expect_err("missing");
        assert_eq!(err.kind, ErrorKind::GroupNotFound);
    }
}
