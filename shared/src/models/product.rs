//! Product & Variant Models

use serde::{Deserialize, Serialize};

use crate::types::{ProductId, VariantId};

/// Catalog product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub display_name: String,
    /// Price in cents
    pub unit_price: i64,
    #[serde(default)]
    pub image: String,
    pub barcode: Option<String>,
    #[serde(default)]
    pub available_qty: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Sellable variant of a product
///
/// A product row in the picker expands into its variants. Variants carry
/// the detail fields shown on association rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    /// Product reference (String ID)
    pub owner_product_id: ProductId,
    pub label: String,
    /// Price in cents
    pub unit_price: i64,
    #[serde(default)]
    pub image: String,
    pub barcode: Option<String>,
    #[serde(default)]
    pub available_qty: i64,
}

fn default_true() -> bool {
    true
}
