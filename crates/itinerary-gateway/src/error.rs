//! Gateway error taxonomy
//!
//! Errors cross the network boundary untranslated; the store wraps them
//! into its load/save failures and the UI layer decides what to surface.
//! Nothing here triggers an automatic retry.

/// Errors from gateway operations
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// No document exists for the requested trip or document id
    #[error("itinerary not found: {0}")]
    NotFound(String),

    /// The service answered with a non-success status
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never completed (connect, timeout, TLS, ...)
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not a valid itinerary document
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The gateway base URL or document id produced an invalid request URL
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
}

impl GatewayError {
    /// Whether resubmitting the same request may succeed
    ///
    /// Full-document persistence is an idempotent overwrite, so transport
    /// and server-side failures are safe to retry; malformed responses and
    /// bad URLs are not.
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Malformed(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
