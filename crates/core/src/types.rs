//! Record types stored on the ledger
//!
//! Both records are persisted as JSON objects under caller-chosen string
//! keys. Field order in the encoded form follows the struct declaration.

use serde::{Deserialize, Deserializer, Serialize};

/// A habit record
///
/// `attendees` keeps insertion order and allows duplicates. Decoding is
/// lenient: absent fields take their zero value and a `null` attendee list
/// decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Habit {
    /// Display name of the habit
    pub name: String,
    /// Category, e.g. "Health" or "Learning"
    #[serde(rename = "type")]
    pub habit_type: String,
    /// People taking part, in the order they joined
    #[serde(deserialize_with = "null_as_empty")]
    pub attendees: Vec<String>,
    /// Current owner
    pub owner: String,
}

impl Habit {
    /// Create a habit record
    pub fn new(
        name: impl Into<String>,
        habit_type: impl Into<String>,
        attendees: Vec<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            habit_type: habit_type.into(),
            attendees,
            owner: owner.into(),
        }
    }

    /// Encode as JSON bytes
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Decode from JSON bytes
    pub fn from_bytes(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

/// A person record (seed data only)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Person's name
    pub name: String,
    /// Age in years
    pub age: u32,
}

impl Person {
    /// Create a person record
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Encode as JSON bytes
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

/// One entry produced by a range scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    /// State key
    pub key: String,
    /// Raw stored bytes
    pub value: Vec<u8>,
}

impl KeyValue {
    /// Create an entry
    pub fn new(key: impl Into<String>, value: Vec<u8>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
