//! Supporting types for outputs.
//!
//! These types are used in output values and serialize to the wire format
//! the host returns to clients.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use hapit_core::{Habit, KeyValue};

use crate::Result;

/// One entry of a habit listing.
///
/// Serializes as `{"Key": <key>, "Record": <stored JSON>}`. The stored JSON
/// is embedded verbatim, not re-encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitRecord {
    /// State key the record was read from
    #[serde(rename = "Key")]
    pub key: String,
    /// Stored JSON document
    #[serde(rename = "Record")]
    pub record: Box<RawValue>,
}

impl HabitRecord {
    /// Wrap a scanned entry, checking that its value is a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the value is not valid UTF-8 JSON.
    pub fn from_entry(entry: KeyValue) -> Result<Self> {
        let text = String::from_utf8(entry.value)?;
        let record = RawValue::from_string(text)?;
        Ok(Self {
            key: entry.key,
            record,
        })
    }

    /// The stored document text.
    pub fn raw(&self) -> &str {
        self.record.get()
    }

    /// Decode the stored document as a habit.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the document is not a habit.
    pub fn habit(&self) -> Result<Habit> {
        Ok(Habit::from_bytes(self.raw().as_bytes())?)
    }
}

impl PartialEq for HabitRecord {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.raw() == other.raw()
    }
}

impl Eq for HabitRecord {}
