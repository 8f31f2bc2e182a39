//! Diff-based reconciliation with the remote authority
//!
//! Submission computes the minimal add/remove sets against the snapshot of
//! ids fetched when editing began, then applies them as two sequential
//! remote calls with defined partial-failure semantics.

pub mod executor;

use thiserror::Error;

use crate::client::ClientError;

pub use executor::apply_delta;

/// Submission error type
///
/// Everything here is recovered at the form boundary and converted into a
/// user-facing notice; nothing is fatal.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Rejected locally before any remote call: a promotion must apply to
    /// at least one product
    #[error("promotion has no confirmed products")]
    NothingConfirmed,

    /// The remove phase failed; no remote mutation happened, safe to retry
    #[error("failed to remove stale associations: {0}")]
    RemoveFailed(#[source] ClientError),

    /// The add phase failed with no removals pending; no remote mutation
    /// happened, safe to retry
    #[error("failed to add associations: {0}")]
    AddFailed(#[source] ClientError),

    /// Removals were applied but the add phase failed; the remote list is
    /// inconsistent until a retry succeeds
    #[error(
        "removed {removed} stale associations but adding {pending} new ones failed; \
         the promotion's remote product list is now inconsistent, retry required: {source}"
    )]
    PartialApply {
        removed: usize,
        pending: usize,
        #[source]
        source: ClientError,
    },
}

/// Result type for submission
pub type SyncResult<T> = Result<T, SyncError>;
