//! One promotion-editing session
//!
//! Owns the selection state, the variant cache, the confirmed association
//! list, and the snapshot of remote ids the submit delta is computed from.
//! Each session is independent and torn down with the form; nothing is
//! shared across sessions.

use std::collections::BTreeSet;
use std::sync::Arc;

use shared::models::{AssociationDelta, ConfirmedAssociation, Product};
use shared::types::{AssociationId, ProductId, PromotionId};

use crate::client::{ClientResult, PromotionApi};
use crate::selection::{merge_selection, SelectionEvent, SelectionState, VariantCache};
use crate::sync::{self, SyncError, SyncResult};

/// Editing session for a promotion's product associations
pub struct EditSession {
    api: Arc<dyn PromotionApi>,
    state: SelectionState,
    cache: VariantCache,
    confirmed: Vec<ConfirmedAssociation>,
    /// Ids recorded remotely when editing began; updated on successful
    /// submit so a repeated submit is a no-op
    remote_ids: BTreeSet<AssociationId>,
}

impl EditSession {
    /// Start a session for a new promotion (nothing recorded remotely yet)
    pub fn create(api: Arc<dyn PromotionApi>) -> Self {
        Self {
            api,
            state: SelectionState::new(),
            cache: VariantCache::new(),
            confirmed: Vec::new(),
            remote_ids: BTreeSet::new(),
        }
    }

    /// Start a session editing an existing promotion
    ///
    /// Fetches the current association ids once; this snapshot is the
    /// baseline the submit delta is computed against.
    pub async fn edit(api: Arc<dyn PromotionApi>, promotion_id: PromotionId) -> ClientResult<Self> {
        let ids = api.fetch_current_associations(promotion_id).await?;
        let mut session = Self::create(api);
        session.remote_ids = ids.into_iter().collect();
        Ok(session)
    }

    /// Read-only snapshot for rendering tri-state checkboxes
    pub fn selection_state(&self) -> &SelectionState {
        &self.state
    }

    pub fn variant_cache(&self) -> &VariantCache {
        &self.cache
    }

    /// Current confirmed association rows
    pub fn confirmed(&self) -> &[ConfirmedAssociation] {
        &self.confirmed
    }

    pub fn toggle_product(&mut self, product_id: &str) {
        self.apply(SelectionEvent::ProductToggled {
            product_id: product_id.to_string(),
        });
    }

    pub fn toggle_variant(&mut self, product_id: &str, variant_id: &str) {
        self.apply(SelectionEvent::VariantToggled {
            product_id: product_id.to_string(),
            variant_id: variant_id.to_string(),
        });
    }

    pub fn select_all_visible(&mut self, product_ids: Vec<ProductId>) {
        self.apply(SelectionEvent::AllVisibleToggled { product_ids });
    }

    /// Expand or collapse a product row; expanding triggers the lazy
    /// variant fetch
    ///
    /// A load failure is returned for a non-blocking notice; the row stays
    /// expanded, renders as "no variants", and re-expanding retries.
    pub async fn toggle_expanded(&mut self, product_id: &str) -> ClientResult<()> {
        self.apply(SelectionEvent::ExpansionToggled {
            product_id: product_id.to_string(),
        });
        if self.state.expanded_products.contains(product_id) {
            self.cache.ensure_loaded(product_id, self.api.as_ref()).await?;
        }
        Ok(())
    }

    fn apply(&mut self, event: SelectionEvent) {
        self.state.apply(&event, &self.cache);
    }

    /// Fold the current selection into the confirmed list and clear it
    ///
    /// Selections are single-use intents: the selected sets are reset after
    /// the merge. Expansion state and the variant cache survive so the
    /// picker keeps its shape for the next round.
    pub fn confirm_selection(&mut self, visible: &[Product]) -> &[ConfirmedAssociation] {
        merge_selection(&mut self.confirmed, &self.state, &self.cache, visible);
        self.state.selected_products.clear();
        self.state.selected_variants.clear();
        &self.confirmed
    }

    /// Remove one confirmed row by composite id; selection state is
    /// untouched
    pub fn remove_confirmed(&mut self, composite_id: &str) {
        self.confirmed.retain(|a| a.composite_id != composite_id);
    }

    /// Validate, diff against the remote snapshot, and apply the delta
    pub async fn submit(&mut self, promotion_id: PromotionId) -> SyncResult<()> {
        if self.confirmed.is_empty() {
            return Err(SyncError::NothingConfirmed);
        }

        let new_ids: BTreeSet<AssociationId> = self
            .confirmed
            .iter()
            .map(ConfirmedAssociation::association_id)
            .collect();
        let delta = AssociationDelta::between(&self.remote_ids, &new_ids);

        sync::apply_delta(self.api.as_ref(), promotion_id, &delta).await?;
        self.remote_ids = new_ids;
        Ok(())
    }
}
