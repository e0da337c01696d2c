//! Error types for state-store access
//!
//! A state store is owned by the host runtime; everything it can report back
//! to the contract is folded into [`StoreError`]. We use `thiserror` for the
//! `Display` and `Error` implementations.

use thiserror::Error;

/// Result type alias for state-store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by a [`StateStore`](crate::StateStore) implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing store rejected or failed the operation.
    ///
    /// The message is carried verbatim so callers can relay it unchanged.
    #[error("{0}")]
    Backend(String),

    /// A range-scan iterator was advanced after it had been closed
    #[error("range iterator already closed")]
    IteratorClosed,
}

impl StoreError {
    /// Build a backend error from any displayable message
    pub fn backend(msg: impl Into<String>) -> Self {
        StoreError::Backend(msg.into())
    }
}
