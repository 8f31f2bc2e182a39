//! Per-session variant cache
//!
//! One bounded page of variants per product, fetched at most once per
//! session. The loading flag is the sole guard against duplicate in-flight
//! fetches; a failed fetch leaves the slot unset so re-expanding retries.

use std::collections::{HashMap, HashSet};

use shared::models::Variant;
use shared::types::ProductId;

use crate::client::{ClientResult, PromotionApi};

/// Variants fetched per product page
pub const VARIANT_PAGE_SIZE: u32 = 50;

/// Lazily-populated store of variant pages, keyed by product id
#[derive(Debug, Default)]
pub struct VariantCache {
    pages: HashMap<ProductId, Vec<Variant>>,
    loading: HashSet<ProductId>,
}

impl VariantCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loaded variants for a product, `None` until a fetch has succeeded
    pub fn loaded(&self, product_id: &str) -> Option<&[Variant]> {
        self.pages.get(product_id).map(Vec::as_slice)
    }

    /// Whether a fetch for this product is in flight
    pub fn is_loading(&self, product_id: &str) -> bool {
        self.loading.contains(product_id)
    }

    /// Fetch a product's variant page unless it is cached or in flight
    pub async fn ensure_loaded(
        &mut self,
        product_id: &str,
        api: &dyn PromotionApi,
    ) -> ClientResult<()> {
        if self.pages.contains_key(product_id) || self.loading.contains(product_id) {
            return Ok(());
        }

        self.loading.insert(product_id.to_string());
        let result = api.fetch_variant_page(product_id, 0, VARIANT_PAGE_SIZE).await;
        self.loading.remove(product_id);

        match result {
            Ok(variants) => {
                tracing::debug!(product_id, count = variants.len(), "variant page loaded");
                self.pages.insert(product_id.to_string(), variants);
                Ok(())
            }
            Err(e) => {
                // Slot stays unset; the row renders as "no variants" and a
                // later expand retries the fetch.
                tracing::warn!(product_id, error = %e, "variant page load failed");
                Err(e)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn preload(&mut self, product_id: &str, variants: Vec<Variant>) {
        self.pages.insert(product_id.to_string(), variants);
    }
}
