//! Store error taxonomy
//!
//! Load and save failures are surfaced to the editor layer, never silently
//! retried. Because every save is a full overwrite, resubmitting the same
//! replacement sequence after a failure is idempotent.

use itinerary_gateway::GatewayError;

/// Errors from store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No document has been loaded yet
    #[error("no itinerary document loaded")]
    NoDocument,

    /// Fetching the document failed; prior state was left untouched
    #[error("load failed: {0}")]
    LoadFailed(#[source] GatewayError),

    /// Persisting the replacement failed; held state was not rolled back
    #[error("save failed: {0}")]
    SaveFailed(#[source] GatewayError),
}

impl StoreError {
    /// Whether a user-initiated resubmission may succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::NoDocument => false,
            Self::LoadFailed(e) | Self::SaveFailed(e) => e.is_retryable(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display() {
        let err = StoreError::SaveFailed(GatewayError::Transport("timed out".to_string()));
        assert!(err.to_string().contains("save failed"));
    }

    #[test]
    fn retryable_follows_gateway_classification() {
        assert!(StoreError::SaveFailed(GatewayError::Transport("x".to_string())).is_retryable());
        assert!(
            !StoreError::LoadFailed(GatewayError::NotFound("trip".to_string())).is_retryable()
        );
        assert!(!StoreError::NoDocument.is_retryable());
    }
}
