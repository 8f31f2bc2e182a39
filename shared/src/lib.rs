//! Shared types for the back-office console
//!
//! Domain models and API envelope types used by the console core and any
//! UI crate sitting on top of it.

pub mod models;
pub mod response;
pub mod types;

// Re-exports
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
