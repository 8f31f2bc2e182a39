//! Remote operations the console core depends on
//!
//! Transport, retries, and authentication live behind this seam.

use async_trait::async_trait;

use shared::models::{Product, Variant};
use shared::types::{AssociationId, PromotionId};

use super::ClientResult;

/// Abstract remote authority
///
/// [`HttpClient`](super::HttpClient) is the production implementation;
/// tests substitute an in-memory mock. `apply_associations` and
/// `remove_associations` are idempotent at the id level: submitting an id
/// that is already present (for apply) or already absent (for remove) is
/// not an error.
#[async_trait]
pub trait PromotionApi: Send + Sync {
    /// Fetch one page of the product catalog
    async fn fetch_product_page(
        &self,
        page: u32,
        page_size: u32,
        search: Option<&str>,
    ) -> ClientResult<Vec<Product>>;

    /// Fetch one page of a product's variants
    async fn fetch_variant_page(
        &self,
        product_id: &str,
        page: u32,
        page_size: u32,
    ) -> ClientResult<Vec<Variant>>;

    /// Fetch the association ids currently recorded for a promotion
    async fn fetch_current_associations(
        &self,
        promotion_id: PromotionId,
    ) -> ClientResult<Vec<AssociationId>>;

    /// Attach the given ids to a promotion
    async fn apply_associations(
        &self,
        promotion_id: PromotionId,
        ids: &[AssociationId],
    ) -> ClientResult<()>;

    /// Detach the given ids from a promotion
    async fn remove_associations(
        &self,
        promotion_id: PromotionId,
        ids: &[AssociationId],
    ) -> ClientResult<()>;
}
