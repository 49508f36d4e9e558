//! # docvault-catalog
//!
//! The catalog is the single source of truth for a client session: an
//! ordered set of file groups, each with its newest-first version chain.
//! It is never persisted and is rehydrated from the gateway on start.

pub mod memory;
pub mod traits;

pub use memory::MemoryCatalog;
pub use traits::FileCatalog;
