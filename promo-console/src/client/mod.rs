//! Remote authority access
//!
//! HTTP calls to the back-office API, behind the [`PromotionApi`] trait so
//! the core can be driven by an in-memory implementation in tests.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

#[cfg(test)]
pub(crate) mod mock;

pub use api::PromotionApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
