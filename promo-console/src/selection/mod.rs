//! Hierarchical product/variant selection
//!
//! The picker shows one row per product; expanding a row lazily loads a
//! bounded page of its variants. Selection is tri-state: a product reads
//! as selected exactly when every loaded variant is selected, partially
//! selected when some are, unselected otherwise.

pub mod cache;
pub mod confirm;
pub mod state;

pub use cache::{VariantCache, VARIANT_PAGE_SIZE};
pub use confirm::merge_selection;
pub use state::{SelectionEvent, SelectionState};
