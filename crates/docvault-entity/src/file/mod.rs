//! File domain entities.

pub mod group;
pub mod version;

pub use group::FileGroup;
pub use version::FileVersion;
