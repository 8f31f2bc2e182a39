//! Promotion Model

use serde::{Deserialize, Serialize};

use crate::types::{PromotionId, Timestamp};

/// Discount type enum
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    Percentage,
    FixedAmount,
}

/// Promotion entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    pub id: PromotionId,
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub discount_type: DiscountType,
    /// Discount value (percentage: 30=30%, fixed: value in cents)
    pub discount_value: f64,
    /// Valid from datetime (Unix millis)
    pub valid_from: Option<Timestamp>,
    /// Valid until datetime (Unix millis)
    pub valid_until: Option<Timestamp>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// Create promotion payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionCreate {
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub valid_from: Option<Timestamp>,
    pub valid_until: Option<Timestamp>,
}

/// Update promotion payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionUpdate {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub discount_type: Option<DiscountType>,
    pub discount_value: Option<f64>,
    pub valid_from: Option<Timestamp>,
    pub valid_until: Option<Timestamp>,
    pub is_active: Option<bool>,
}
