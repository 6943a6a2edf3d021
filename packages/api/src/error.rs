//! Error taxonomy for API calls.

use thiserror::Error;

/// Why an API call failed.
///
/// Callers branch on the variant to tell retryable transport problems from
/// terminal rejections; the `Display` impl still yields the human-readable
/// message that UI code shows directly.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a server response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status. `message` comes from
    /// the response body when the server provided one.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The server no longer accepts the presented token.
    #[error("session is no longer valid")]
    InvalidSession,

    /// The response body did not match the expected shape.
    #[error("malformed server response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True for failures where retrying the same request can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
