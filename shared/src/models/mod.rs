//! Data models
//!
//! Shared between the console core and the form/UI layer above it.
//! Catalog entities are fetched read-only and never mutated locally.

pub mod association;
pub mod product;
pub mod promotion;

// Re-exports
pub use association::*;
pub use product::*;
pub use promotion::*;
