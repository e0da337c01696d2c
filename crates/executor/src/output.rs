//! Output enum for command execution results.
//!
//! Every command produces exactly one output type. This mapping is
//! deterministic: the same command always produces the same output variant
//! (though the values may differ based on ledger state).

use serde::{Deserialize, Serialize};

use crate::types::HabitRecord;
use crate::Result;

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output`
/// variant, as documented on the command.
///
/// # Example
///
/// ```text
/// match executor.execute(&store, Command::QueryHabit { key })? {
///     Output::Record(Some(bytes)) => println!("Found {} bytes", bytes.len()),
///     Output::Record(None) => println!("Not found"),
///     _ => unreachable!("QueryHabit always returns Record"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// No return value (writes)
    Unit,

    /// Raw stored bytes, `None` if the key was never written
    Record(Option<Vec<u8>>),

    /// Habit listing in store iteration order
    Habits(Vec<HabitRecord>),
}

impl Output {
    /// Convert into the byte payload returned to the host.
    ///
    /// `Unit` and an absent record become an empty payload; a listing
    /// becomes a JSON array (`[]` when empty).
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the listing cannot be encoded.
    pub fn into_payload(self) -> Result<Vec<u8>> {
        match self {
            Output::Unit | Output::Record(None) => Ok(Vec::new()),
            Output::Record(Some(bytes)) => Ok(bytes),
            Output::Habits(records) => Ok(serde_json::to_vec(&records)?),
        }
    }
}
