//! # docvault-entity
//!
//! Domain entity models for DocVault. Every struct in this crate is either
//! a backend payload shape (camelCase JSON on the wire) or a domain value
//! object. Payload entities derive `Debug`, `Clone`, `Serialize`, and
//! `Deserialize`.

pub mod file;
pub mod search;
pub mod version;
pub mod viewer;
