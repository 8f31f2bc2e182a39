//! Two-phase association sync
//!
//! Removals go first so an item is never targeted by two overlapping
//! promotions mid-sync; the calls are sequential by design, never
//! concurrent. There is no cancellation: an issued call runs to completion
//! or failure.

use shared::models::AssociationDelta;
use shared::types::PromotionId;

use crate::client::PromotionApi;

use super::{SyncError, SyncResult};

/// Apply an association delta to the remote authority
///
/// An empty delta issues zero remote calls. Both remote operations are
/// idempotent at the id level, so retrying after a failure is safe from
/// the caller's perspective.
pub async fn apply_delta(
    api: &dyn PromotionApi,
    promotion_id: PromotionId,
    delta: &AssociationDelta,
) -> SyncResult<()> {
    if delta.is_empty() {
        tracing::debug!(promotion_id, "associations already in sync");
        return Ok(());
    }

    let removed = delta.to_remove.len();
    if removed > 0 {
        api.remove_associations(promotion_id, &delta.to_remove)
            .await
            .map_err(SyncError::RemoveFailed)?;
        tracing::info!(promotion_id, removed, "stale associations removed");
    }

    let pending = delta.to_add.len();
    if pending > 0 {
        api.apply_associations(promotion_id, &delta.to_add)
            .await
            .map_err(|source| {
                if removed > 0 {
                    tracing::error!(
                        promotion_id,
                        removed,
                        pending,
                        "add phase failed after removals were applied"
                    );
                    SyncError::PartialApply {
                        removed,
                        pending,
                        source,
                    }
                } else {
                    SyncError::AddFailed(source)
                }
            })?;
        tracing::info!(promotion_id, added = pending, "new associations applied");
    }

    Ok(())
}
