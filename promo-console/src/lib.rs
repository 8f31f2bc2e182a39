//! Promotion Console - product association core
//!
//! Hierarchical product/variant selection with tri-state reconciliation,
//! duplicate-free confirmation merge, and diff-based sync of a promotion's
//! product associations against the remote authority.

pub mod client;
pub mod selection;
pub mod session;
pub mod sync;

pub use client::{ClientConfig, ClientError, ClientResult, HttpClient, PromotionApi};
pub use selection::{SelectionEvent, SelectionState, VariantCache, VARIANT_PAGE_SIZE};
pub use session::EditSession;
pub use sync::{SyncError, SyncResult};
