//! Version chain model: parsing and advancing version identifiers.

pub mod number;

pub use number::{INITIAL_VERSION, VersionNumber, next_version};
