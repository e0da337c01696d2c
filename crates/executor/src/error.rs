//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Terminal**: Every error ends the invocation; nothing is retried
//!
//! At the invocation boundary an error becomes a failed
//! [`Response`](crate::Response) carrying the `Display` text.

use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Dispatch | `ArgumentCount`, `UnknownFunction` | Bad invocation |
/// | Not Found | `NotFound` | Record to mutate doesn't exist |
/// | System | `Store`, `Serialization`, `Config` | Infrastructure errors |
///
/// # Example
///
/// ```ignore
/// use hapit_executor::{Command, Error};
///
/// match Command::from_invocation("createHabit", vec!["H1".into()]) {
///     Err(Error::ArgumentCount { expected, .. }) => assert_eq!(expected, 5),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Dispatch ====================
    /// Wrong number of positional arguments
    #[error("Incorrect number of arguments. Expecting {expected}")]
    ArgumentCount { expected: usize, actual: usize },

    /// Function name not in the dispatch table
    #[error("Invalid Smart Contract function name: {name}")]
    UnknownFunction { name: String },

    // ==================== Not Found ====================
    /// No habit stored at the key being mutated
    #[error("habit not found: {key}")]
    NotFound { key: String },

    // ==================== System Errors ====================
    /// State-store failure, message relayed verbatim
    #[error("{reason}")]
    Store { reason: String },

    /// Encoding or decoding failure
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// Invalid contract configuration
    #[error("invalid configuration: {reason}")]
    Config { reason: String },
}
