//! Confirmation merge
//!
//! Folds the current selection into the confirmed association list.
//! The confirmed list is keyed by composite id: ids already present are
//! skipped, so repeating a confirmation never duplicates rows.

use std::collections::HashSet;

use shared::models::{ConfirmedAssociation, Product};

use super::{SelectionState, VariantCache};

/// Append association rows for the current selection over the visible
/// products, skipping composite ids already confirmed
pub fn merge_selection(
    confirmed: &mut Vec<ConfirmedAssociation>,
    state: &SelectionState,
    cache: &VariantCache,
    visible: &[Product],
) {
    let existing: HashSet<&str> = confirmed.iter().map(|a| a.composite_id.as_str()).collect();
    let mut added = Vec::new();

    for product in visible {
        match cache.loaded(&product.id) {
            // Variant-level rows for every selected loaded variant
            Some(variants) if !variants.is_empty() => {
                for v in variants {
                    if !state.selected_variants.contains(&v.id) {
                        continue;
                    }
                    let composite_id = format!("{}-{}", product.id, v.id);
                    if existing.contains(composite_id.as_str()) {
                        continue;
                    }
                    added.push(ConfirmedAssociation {
                        composite_id,
                        display_label: format!("{} / {}", product.display_name, v.label),
                        image: v.image.clone(),
                        barcode: v.barcode.clone(),
                        unit_price: v.unit_price,
                        available_qty: v.available_qty,
                        variant_id: Some(v.id.clone()),
                    });
                }
            }
            // No variant granularity: one whole-product row
            _ => {
                if !state.selected_products.contains(&product.id)
                    || existing.contains(product.id.as_str())
                {
                    continue;
                }
                added.push(ConfirmedAssociation {
                    composite_id: product.id.clone(),
                    display_label: product.display_name.clone(),
                    image: product.image.clone(),
                    barcode: product.barcode.clone(),
                    unit_price: product.unit_price,
                    available_qty: product.available_qty,
                    variant_id: None,
                });
            }
        }
    }

    confirmed.extend(added);
}
