//! Search result entities.

pub mod hit;

pub use hit::{SearchHit, snippet};
