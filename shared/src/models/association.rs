//! Promotion ↔ product association models
//!
//! A confirmed association is one row of the promotion form's product
//! table; the delta is what submission sends to the remote authority.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{AssociationId, VariantId};

/// One confirmed association row in the promotion form
///
/// The confirmed list is keyed by `composite_id`; re-adding a present id
/// is a no-op, never a duplicate entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmedAssociation {
    /// `"{product_id}-{variant_id}"` for variant rows, the product id
    /// alone for whole-product rows
    pub composite_id: String,
    pub display_label: String,
    #[serde(default)]
    pub image: String,
    pub barcode: Option<String>,
    /// Price in cents
    pub unit_price: i64,
    pub available_qty: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<VariantId>,
}

impl ConfirmedAssociation {
    /// Id the remote authority keys this association by: the variant id
    /// when present, otherwise the whole composite id
    pub fn association_id(&self) -> AssociationId {
        self.variant_id
            .clone()
            .unwrap_or_else(|| self.composite_id.clone())
    }
}

/// Minimal add/remove sets transforming one association list into another
///
/// Derived at submit time, never stored. Ids present in both inputs are
/// left untouched so no redundant remote calls are issued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociationDelta {
    pub to_add: Vec<AssociationId>,
    pub to_remove: Vec<AssociationId>,
}

impl AssociationDelta {
    /// Set difference in both directions: `to_remove = old − new`,
    /// `to_add = new − old`
    pub fn between(
        old_ids: &BTreeSet<AssociationId>,
        new_ids: &BTreeSet<AssociationId>,
    ) -> Self {
        Self {
            to_add: new_ids.difference(old_ids).cloned().collect(),
            to_remove: old_ids.difference(new_ids).cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> BTreeSet<AssociationId> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn delta_computes_minimal_sets() {
        let old = ids(&["1", "2", "3"]);
        let new = ids(&["2", "3", "4"]);

        let delta = AssociationDelta::between(&old, &new);

        assert_eq!(delta.to_add, vec!["4".to_string()]);
        assert_eq!(delta.to_remove, vec!["1".to_string()]);
    }

    #[test]
    fn delta_properties_hold() {
        let old = ids(&["a", "b", "c", "d"]);
        let new = ids(&["c", "d", "e"]);

        let delta = AssociationDelta::between(&old, &new);

        // to_add is disjoint from old, to_remove is disjoint from new
        assert!(delta.to_add.iter().all(|id| !old.contains(id)));
        assert!(delta.to_remove.iter().all(|id| !new.contains(id)));

        // (old − to_remove) ∪ to_add == new
        let mut rebuilt: BTreeSet<AssociationId> = old
            .iter()
            .filter(|id| !delta.to_remove.contains(id))
            .cloned()
            .collect();
        rebuilt.extend(delta.to_add.iter().cloned());
        assert_eq!(rebuilt, new);
    }

    #[test]
    fn equal_sets_produce_empty_delta() {
        let old = ids(&["1", "2"]);

        let delta = AssociationDelta::between(&old, &old.clone());

        assert!(delta.is_empty());
    }

    #[test]
    fn association_id_falls_back_to_composite() {
        let variant_row = ConfirmedAssociation {
            composite_id: "10-55".to_string(),
            display_label: "Shirt / L".to_string(),
            image: String::new(),
            barcode: None,
            unit_price: 1500,
            available_qty: 4,
            variant_id: Some("55".to_string()),
        };
        let product_row = ConfirmedAssociation {
            composite_id: "10".to_string(),
            display_label: "Shirt".to_string(),
            image: String::new(),
            barcode: None,
            unit_price: 1500,
            available_qty: 4,
            variant_id: None,
        };

        assert_eq!(variant_row.association_id(), "55");
        assert_eq!(product_row.association_id(), "10");
    }
}
