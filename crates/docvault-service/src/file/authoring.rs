//! Authoring service: new Word versions written as plain text.

use std::io::Cursor;

use bytes::Bytes;
use docx_rs::{Docx, Paragraph, Run};
use tracing::debug;

use docvault_core::error::AppError;
use docvault_entity::file::FileVersion;
use docvault_gateway::UploadPayload;

use super::upload::UploadService;
use crate::request::{self, AuthoredRevision};

/// MIME type of a Word document.
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Turns editor text into a DOCX and uploads it as the next version.
#[derive(Debug, Clone)]
pub struct AuthoringService {
    uploads: UploadService,
}

/// Pack plain text into a DOCX, one paragraph per line.
pub fn render_docx(text: &str) -> Result<Bytes, AppError> {
    let docx = text.lines().fold(Docx::new(), |doc, line| {
        doc.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)))
    });

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| AppError::internal(format!("Failed to build document: {e}")))?;
    Ok(Bytes::from(buffer.into_inner()))
}

impl AuthoringService {
    /// Creates a new authoring service on top of the upload flow.
    pub fn new(uploads: UploadService) -> Self {
        Self { uploads }
    }

    /// Save editor text as the next version of a Word document.
    ///
    /// Only `.docx` documents can be authored. The version is computed before
    /// the document is rendered, so an unparseable current version fails
    /// without any work being done.
    pub async fn author_revision(
        &self,
        file_name: &str,
        req: AuthoredRevision,
    ) -> Result<FileVersion, AppError> {
        request::check(&req)?;
        let plan = self.uploads.plan_revision(file_name).await?;

        if plan.group.extension().as_deref() != Some("docx") {
            return Err(AppError::validation(
                "Only Word documents (.docx) can be edited",
            ));
        }

        let content = render_docx(&req.text)?;
        debug!(file_name, bytes = content.len(), "Rendered document");

        let payload = UploadPayload::new(plan.group.file_name.clone(), content)
            .mime_type(DOCX_MIME)
            .author(req.author.trim())
            .remark(req.remark.trim())
            .keywords(req.keywords.trim());

        self.uploads.commit_revision(plan, payload).await
    }
}
