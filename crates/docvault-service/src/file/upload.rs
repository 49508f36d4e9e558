//! Upload service: first uploads and new versions from files.

use std::sync::Arc;

use tracing::{debug, info};

use docvault_catalog::FileCatalog;
use docvault_core::error::AppError;
use docvault_entity::file::{FileGroup, FileVersion};
use docvault_entity::version::{INITIAL_VERSION, VersionNumber};
use docvault_gateway::{Gateway, UploadPayload};

use crate::request::{self, CreateDocument, RevisionUpload};

/// Creates documents and appends versions to them.
#[derive(Clone)]
pub struct UploadService {
    /// Session catalog.
    catalog: Arc<dyn FileCatalog>,
    /// Backend gateway.
    gateway: Arc<dyn Gateway>,
}

impl std::fmt::Debug for UploadService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadService").finish()
    }
}

/// Lowercase extension of a file name, if any.
fn extension(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.trim().to_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// A revision about to be uploaded: where it starts from and what it becomes.
#[derive(Debug, Clone)]
pub(crate) struct PlannedRevision {
    /// The document being revised.
    pub group: FileGroup,
    /// Current version when the edit began.
    pub base: String,
    /// Version the upload will carry.
    pub next: VersionNumber,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(catalog: Arc<dyn FileCatalog>, gateway: Arc<dyn Gateway>) -> Self {
        Self { catalog, gateway }
    }

    /// Upload a brand-new document as version `1.0`.
    ///
    /// The name is checked against the catalog before anything is sent, so a
    /// duplicate never reaches the backend.
    pub async fn create_document(&self, req: CreateDocument) -> Result<FileVersion, AppError> {
        request::check(&req)?;
        let file_name = req.file_name.trim().to_string();

        if self.catalog.get_group(&file_name).await.is_ok() {
            return Err(AppError::duplicate_file_name(format!(
                "A file named {file_name} already exists"
            )));
        }

        let payload = UploadPayload::new(file_name.clone(), req.content)
            .author(req.author.trim())
            .remark(req.remark.trim())
            .keywords(req.keywords.trim())
            .version(INITIAL_VERSION.to_string());

        let mut version = self.gateway.create_file(payload).await?;
        if version.file_name.trim().is_empty() {
            version.file_name = file_name.clone();
        }

        self.catalog.create_group(&file_name, version.clone()).await?;
        info!(file_name = %file_name, version = %version.version, "Document created");
        Ok(version)
    }

    /// Upload a file as the next version of an existing document.
    ///
    /// The file must have the same extension as the document. Fails with
    /// `Conflict` if another version landed while this one was uploading.
    pub async fn upload_revision(
        &self,
        file_name: &str,
        req: RevisionUpload,
    ) -> Result<FileVersion, AppError> {
        request::check(&req)?;
        let plan = self.plan_revision(file_name).await?;

        let expected = plan.group.extension();
        let actual = extension(&req.source_name);
        if expected.as_deref() == Some("docx") && actual.as_deref() != Some("docx") {
            return Err(AppError::validation(
                "Please upload a Word document (.docx) file",
            ));
        }
        if expected != actual {
            let wanted = expected.unwrap_or_default().to_uppercase();
            return Err(AppError::validation(format!(
                "Please upload a {wanted} file to match the original format"
            )));
        }

        let payload = UploadPayload::new(plan.group.file_name.clone(), req.content)
            .author(req.author.trim())
            .remark(req.remark.trim())
            .keywords(req.keywords.trim());

        self.commit_revision(plan, payload).await
    }

    /// Look up the document and compute the version a revision will carry.
    ///
    /// Fails with `InvalidVersionFormat` when the current version cannot be
    /// advanced; nothing has been changed at that point.
    pub(crate) async fn plan_revision(&self, file_name: &str) -> Result<PlannedRevision, AppError> {
        let group = self.catalog.get_group(file_name).await?;
        let base = group
            .current()
            .map(|v| v.version.clone())
            .unwrap_or_else(|| INITIAL_VERSION.to_string());
        let next = VersionNumber::parse(&base)?.next();

        debug!(file_name, base = %base, next = %next, "Planned revision");
        Ok(PlannedRevision { group, base, next })
    }

    /// Send a planned revision to the backend and record it in the catalog.
    pub(crate) async fn commit_revision(
        &self,
        plan: PlannedRevision,
        payload: UploadPayload,
    ) -> Result<FileVersion, AppError> {
        let file_name = plan.group.file_name;
        let payload = payload.version(plan.next.to_string());

        let mut version = self.gateway.create_file(payload).await?;
        if version.file_name.trim().is_empty() {
            version.file_name = file_name.clone();
        }

        self.catalog
            .append_version_if_current(&file_name, &plan.base, version.clone())
            .await?;

        info!(
            file_name = %file_name,
            from = %plan.base,
            version = %version.version,
            "Version uploaded"
        );
        Ok(version)
    }
}
