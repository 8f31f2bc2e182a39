//! Common types for the shared crate

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Catalog product identifier (opaque, unique within a catalog page)
pub type ProductId = String;

/// Variant identifier
pub type VariantId = String;

/// Promotion identifier
pub type PromotionId = i64;

/// Association identifier as recorded by the remote authority:
/// the variant id for variant-level rows, the product id otherwise
pub type AssociationId = String;
