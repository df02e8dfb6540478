//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Aging rules never fail; these cover the edges where inventory data enters
/// or leaves the domain as documents.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An inventory document could not be decoded.
    #[error("decode failed: {0}")]
    Decode(String),

    /// Domain values could not be encoded into a document.
    #[error("encode failed: {0}")]
    Encode(String),
}

impl DomainError {
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
