//! Error types for the transport bridge.

use thiserror::Error;

/// Structured error types for DTO encoding and decoding.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TransportError {
    /// Encoding a tree or page to JSON failed
    #[error("transport encoding failed: {reason}")]
    EncodeFailed { reason: String },

    /// Decoding a JSON payload into DTOs failed
    #[error("transport decoding failed: {reason}")]
    DecodeFailed { reason: String },
}

impl TransportError {
    /// Check if this error occurred while encoding
    pub fn is_encode_error(&self) -> bool {
        matches!(self, TransportError::EncodeFailed { .. })
    }

    /// Check if this error occurred while decoding
    pub fn is_decode_error(&self) -> bool {
        matches!(self, TransportError::DecodeFailed { .. })
    }
}

// Conversion from TransportError to the main Error type
impl From<TransportError> for crate::Error {
    fn from(err: TransportError) -> Self {
        crate::Error::Transport(err)
    }
}
