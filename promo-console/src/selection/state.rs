//! Selection state and its transition function
//!
//! The state is mutated only through [`SelectionState::apply`], a pure
//! transition over [`SelectionEvent`] that can be unit-tested without any
//! rendering harness. Cascade direction is deliberately asymmetric:
//! toggling a product cascades down to its loaded variants, while toggling
//! a variant *recomputes* product membership and never cascades back down.
//! Symmetric cascading oscillates when a partially-selected product is
//! toggled twice.

use std::collections::HashSet;

use serde::Serialize;

use shared::types::{ProductId, VariantId};

use super::VariantCache;

/// Snapshot of the picker's checkbox state
///
/// Tri-state rule: a product is a member of `selected_products` iff its
/// variant page is loaded, non-empty, and fully contained in
/// `selected_variants`; a product with no loaded variants toggles as a
/// single unit. The rule holds after every event, not just eventually.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SelectionState {
    pub selected_products: HashSet<ProductId>,
    pub selected_variants: HashSet<VariantId>,
    pub expanded_products: HashSet<ProductId>,
}

/// One user interaction with the picker
#[derive(Debug, Clone)]
pub enum SelectionEvent {
    ProductToggled {
        product_id: ProductId,
    },
    VariantToggled {
        product_id: ProductId,
        variant_id: VariantId,
    },
    ExpansionToggled {
        product_id: ProductId,
    },
    /// "Select all" over the products currently visible in the picker
    AllVisibleToggled {
        product_ids: Vec<ProductId>,
    },
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event, keeping the tri-state rule intact
    ///
    /// The cache is read-only here; loading is a session concern.
    pub fn apply(&mut self, event: &SelectionEvent, cache: &VariantCache) {
        match event {
            SelectionEvent::ProductToggled { product_id } => {
                self.toggle_product(product_id, cache);
            }
            SelectionEvent::VariantToggled {
                product_id,
                variant_id,
            } => {
                self.toggle_variant(product_id, variant_id, cache);
            }
            SelectionEvent::ExpansionToggled { product_id } => {
                if !self.expanded_products.remove(product_id) {
                    self.expanded_products.insert(product_id.clone());
                }
            }
            SelectionEvent::AllVisibleToggled { product_ids } => {
                self.toggle_all_visible(product_ids, cache);
            }
        }
    }

    /// Whether a loaded product is partially selected (some but not all
    /// variants), for rendering the indeterminate checkbox state
    pub fn is_partially_selected(&self, product_id: &str, cache: &VariantCache) -> bool {
        let Some(variants) = cache.loaded(product_id) else {
            return false;
        };
        let selected = variants
            .iter()
            .filter(|v| self.selected_variants.contains(&v.id))
            .count();
        selected > 0 && selected < variants.len()
    }

    fn toggle_product(&mut self, product_id: &str, cache: &VariantCache) {
        let selecting = !self.selected_products.contains(product_id);
        if selecting {
            self.selected_products.insert(product_id.to_string());
        } else {
            self.selected_products.remove(product_id);
        }

        // The one place selection flows downward: loaded variants follow
        // the new product state. A loaded-but-empty page cascades nothing.
        if let Some(variants) = cache.loaded(product_id) {
            for v in variants {
                if selecting {
                    self.selected_variants.insert(v.id.clone());
                } else {
                    self.selected_variants.remove(&v.id);
                }
            }
        }
    }

    fn toggle_variant(&mut self, product_id: &str, variant_id: &str, cache: &VariantCache) {
        if !self.selected_variants.remove(variant_id) {
            self.selected_variants.insert(variant_id.to_string());
        }
        self.recompute_product(product_id, cache);
    }

    /// Upward direction: membership is recomputed, never toggled
    fn recompute_product(&mut self, product_id: &str, cache: &VariantCache) {
        let fully_selected = cache.loaded(product_id).is_some_and(|variants| {
            !variants.is_empty()
                && variants
                    .iter()
                    .all(|v| self.selected_variants.contains(&v.id))
        });

        if fully_selected {
            self.selected_products.insert(product_id.to_string());
        } else {
            self.selected_products.remove(product_id);
        }
    }

    fn toggle_all_visible(&mut self, product_ids: &[ProductId], cache: &VariantCache) {
        // Toggle semantics: only when every visible product is already
        // selected does "select all" turn into "clear the visible set".
        let all_selected = !product_ids.is_empty()
            && product_ids
                .iter()
                .all(|p| self.selected_products.contains(p));

        for product_id in product_ids {
            if all_selected {
                self.selected_products.remove(product_id);
            } else {
                self.selected_products.insert(product_id.clone());
            }

            // Cascade into loaded variants only; unloaded products stay
            // selected at product level and no fetch is forced.
            if let Some(variants) = cache.loaded(product_id) {
                for v in variants {
                    if all_selected {
                        self.selected_variants.remove(&v.id);
                    } else {
                        self.selected_variants.insert(v.id.clone());
                    }
                }
            }
        }
    }
}
