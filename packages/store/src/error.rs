//! Store-level failures.

use thiserror::Error;

/// Why a session-store operation failed.
///
/// Wraps the API error taxonomy and adds the one purely local case: calling
/// an authenticated operation with no session. No store method panics or
/// leaves partial state behind on failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The operation needs a signed-in session and none exists.
    #[error("not signed in")]
    NotAuthenticated,

    /// The underlying API call failed.
    #[error(transparent)]
    Api(#[from] api::ApiError),
}
