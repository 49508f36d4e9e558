//! Document services: catalog sync, upload, authoring, search, download, viewing.

pub mod authoring;
pub mod catalog;
pub mod download;
pub mod search;
pub mod upload;
pub mod viewer;

pub use authoring::AuthoringService;
pub use catalog::CatalogService;
pub use download::DownloadService;
pub use search::{SearchOutcome, SearchResultView, SearchService};
pub use upload::UploadService;
pub use viewer::ViewerService;
