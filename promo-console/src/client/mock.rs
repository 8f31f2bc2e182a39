//! In-memory [`PromotionApi`] implementation for tests
//!
//! Records every remote call in order and can be scripted to fail
//! individual phases.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use shared::models::{Product, Variant};
use shared::types::{AssociationId, ProductId, PromotionId};

use super::{ClientError, ClientResult, PromotionApi};

/// Remote calls the mock has observed, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RemoteCall {
    ProductPage,
    VariantPage(ProductId),
    CurrentAssociations(PromotionId),
    Apply(Vec<AssociationId>),
    Remove(Vec<AssociationId>),
}

#[derive(Default)]
pub(crate) struct MockApi {
    products: Vec<Product>,
    variants: HashMap<ProductId, Vec<Variant>>,
    current: Vec<AssociationId>,
    /// Number of variant fetches that fail before one succeeds
    variant_failures: Mutex<u32>,
    fail_remove: bool,
    fail_add: bool,
    calls: Mutex<Vec<RemoteCall>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_variants(mut self, product_id: &str, variants: Vec<Variant>) -> Self {
        self.variants.insert(product_id.to_string(), variants);
        self
    }

    pub fn with_current(mut self, ids: &[&str]) -> Self {
        self.current = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn failing_variant_fetches(self, count: u32) -> Self {
        *self.variant_failures.lock().unwrap() = count;
        self
    }

    pub fn failing_remove(mut self) -> Self {
        self.fail_remove = true;
        self
    }

    pub fn failing_add(mut self) -> Self {
        self.fail_add = true;
        self
    }

    /// Calls observed so far
    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RemoteCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn remote_error(what: &str) -> ClientError {
        ClientError::Internal(format!("{what} unavailable"))
    }
}

#[async_trait]
impl PromotionApi for MockApi {
    async fn fetch_product_page(
        &self,
        _page: u32,
        _page_size: u32,
        _search: Option<&str>,
    ) -> ClientResult<Vec<Product>> {
        self.record(RemoteCall::ProductPage);
        Ok(self.products.clone())
    }

    async fn fetch_variant_page(
        &self,
        product_id: &str,
        _page: u32,
        _page_size: u32,
    ) -> ClientResult<Vec<Variant>> {
        self.record(RemoteCall::VariantPage(product_id.to_string()));

        let mut failures = self.variant_failures.lock().unwrap();
        if *failures > 0 {
            *failures -= 1;
            return Err(Self::remote_error("variant page"));
        }

        Ok(self.variants.get(product_id).cloned().unwrap_or_default())
    }

    async fn fetch_current_associations(
        &self,
        promotion_id: PromotionId,
    ) -> ClientResult<Vec<AssociationId>> {
        self.record(RemoteCall::CurrentAssociations(promotion_id));
        Ok(self.current.clone())
    }

    async fn apply_associations(
        &self,
        _promotion_id: PromotionId,
        ids: &[AssociationId],
    ) -> ClientResult<()> {
        self.record(RemoteCall::Apply(ids.to_vec()));
        if self.fail_add {
            return Err(Self::remote_error("association apply"));
        }
        Ok(())
    }

    async fn remove_associations(
        &self,
        _promotion_id: PromotionId,
        ids: &[AssociationId],
    ) -> ClientResult<()> {
        self.record(RemoteCall::Remove(ids.to_vec()));
        if self.fail_remove {
            return Err(Self::remote_error("association remove"));
        }
        Ok(())
    }
}

/// Test fixture: a catalog product
pub(crate) fn product(id: &str, display_name: &str) -> Product {
    Product {
        id: id.to_string(),
        display_name: display_name.to_string(),
        unit_price: 1000,
        image: String::new(),
        barcode: None,
        available_qty: 10,
        is_active: true,
    }
}

/// Test fixture: a variant of a product
pub(crate) fn variant(id: &str, owner: &str, label: &str) -> Variant {
    Variant {
        id: id.to_string(),
        owner_product_id: owner.to_string(),
        label: label.to_string(),
        unit_price: 1200,
        image: String::new(),
        barcode: None,
        available_qty: 5,
    }
}
