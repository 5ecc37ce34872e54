use thiserror::Error;

/// Domain failure returned by a [`ProductStore`](super::ProductStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record with this id.
    #[error("product {id} not found")]
    NotFound { id: u64 },

    /// Name, quantity or price out of range.
    #[error("invalid product data: {0}")]
    InvalidArgument(String),

    /// Unexpected fault inside the store. The message is shown to callers.
    #[error("internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    pub(crate) fn lock_poisoned(operation: &'static str) -> Self {
        StoreError::Internal(format!("record set unavailable during {operation}"))
    }
}
