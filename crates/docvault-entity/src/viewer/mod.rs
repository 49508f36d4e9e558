//! Document viewer integration types.

pub mod descriptor;
pub mod document_type;

pub use descriptor::ViewerDescriptor;
pub use document_type::{DocumentType, ViewerFileType, ViewerFormat, extension_of};
