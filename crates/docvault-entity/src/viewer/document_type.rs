//! Extension → viewer document type mapping.
//!
//! The external document server needs both a normalized file type and a
//! document family. Unknown extensions are opened as Word documents.

use serde::{Deserialize, Serialize};

/// Document family understood by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Word-processing documents.
    Word,
    /// Spreadsheets.
    Cell,
    /// Presentations.
    Slide,
    /// Plain text and PDF.
    Text,
}

impl DocumentType {
    /// Wire name of this family.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Cell => "cell",
            Self::Slide => "slide",
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized file type handed to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerFileType {
    /// Word document.
    Docx,
    /// Excel workbook.
    Xlsx,
    /// PowerPoint deck.
    Pptx,
    /// PDF document.
    Pdf,
    /// Plain text.
    Txt,
}

impl ViewerFileType {
    /// File extension for this type.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Docx => "docx",
            Self::Xlsx => "xlsx",
            Self::Pptx => "pptx",
            Self::Pdf => "pdf",
            Self::Txt => "txt",
        }
    }
}

impl std::fmt::Display for ViewerFileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// The pair the viewer is configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerFormat {
    /// Normalized file type.
    pub file_type: ViewerFileType,
    /// Document family.
    pub document_type: DocumentType,
}

impl ViewerFormat {
    /// Map a file extension (case-insensitive) to a viewer format.
    pub fn from_extension(ext: &str) -> Self {
        let (file_type, document_type) = match ext.to_lowercase().as_str() {
            "doc" | "docx" | "odt" | "rtf" => (ViewerFileType::Docx, DocumentType::Word),
            "xls" | "xlsx" | "ods" => (ViewerFileType::Xlsx, DocumentType::Cell),
            "ppt" | "pptx" | "odp" => (ViewerFileType::Pptx, DocumentType::Slide),
            "pdf" => (ViewerFileType::Pdf, DocumentType::Text),
            "txt" => (ViewerFileType::Txt, DocumentType::Text),
            _ => (ViewerFileType::Docx, DocumentType::Word),
        };
        Self {
            file_type,
            document_type,
        }
    }

    /// Map a download link to a viewer format via its extension.
    pub fn from_link(link: &str) -> Self {
        Self::from_extension(&extension_of(link))
    }
}

/// Lowercase extension of the last path segment of `link`.
///
/// Absolute URLs are parsed so query strings and fragments are ignored;
/// relative links fall back to plain string handling. Returns an empty
/// string when there is no extension.
pub fn extension_of(link: &str) -> String {
    let path = match url::Url::parse(link) {
        Ok(url) => url.path().to_string(),
        Err(_) => link
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    let segment = path.rsplit('/').next().unwrap_or_default();
    segment
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}
