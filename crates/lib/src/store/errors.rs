//! Error types for the page store.

use thiserror::Error;

/// Structured error types for page persistence operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// No page with the given id exists in the store
    #[error("page not found: {page}")]
    PageNotFound { page: String },

    /// A persisted snapshot could not be understood
    #[error("invalid store snapshot: {reason}")]
    InvalidSnapshot { reason: String },
}

impl StoreError {
    /// Check if this error indicates a missing page
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::PageNotFound { .. })
    }
}

// Conversion from StoreError to the main Error type
impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
