//! Contract configuration via `hapit.toml`
//!
//! Every setting has a default, so an empty file (or no file at all) gives
//! the stock behaviour. Hosts that deploy the contract alongside a config
//! file load it once and hand the result to [`HabitContract`](crate::HabitContract).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "hapit.toml";

/// First key of the default habit listing range (inclusive).
pub const DEFAULT_RANGE_START: &str = "HABIT0";

/// End of the default habit listing range (exclusive).
pub const DEFAULT_RANGE_END: &str = "HABIT999";

/// What the change operations do when the target key holds no habit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingRecordPolicy {
    /// Fail with `NotFound` (missing key) or `Serialization` (malformed
    /// bytes) and write nothing.
    #[default]
    Reject,
    /// Start from an empty habit, apply the change and write it.
    Tolerate,
}

/// Key range scanned by `queryAllHabits`: `start <= key < end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitRange {
    /// Inclusive lower bound
    #[serde(default = "default_range_start")]
    pub start: String,
    /// Exclusive upper bound
    #[serde(default = "default_range_end")]
    pub end: String,
}

fn default_range_start() -> String {
    DEFAULT_RANGE_START.to_string()
}

fn default_range_end() -> String {
    DEFAULT_RANGE_END.to_string()
}

impl Default for HabitRange {
    fn default() -> Self {
        Self {
            start: default_range_start(),
            end: default_range_end(),
        }
    }
}

/// Contract configuration loaded from `hapit.toml`.
///
/// # Example
///
/// ```toml
/// missing_records = "reject"
///
/// [habit_range]
/// start = "HABIT0"
/// end = "HABIT999"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Behaviour of `changeHabitOwner` / `changeHabitAttendees` on a key
    /// without a habit.
    #[serde(default)]
    pub missing_records: MissingRecordPolicy,
    /// Range listed by `queryAllHabits`.
    #[serde(default)]
    pub habit_range: HabitRange,
}

impl ContractConfig {
    /// Config that rewrites missing or malformed habits instead of failing.
    pub fn tolerant() -> Self {
        Self {
            missing_records: MissingRecordPolicy::Tolerate,
            ..Self::default()
        }
    }

    /// Check that the habit range is usable.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the start key is empty or the end key does not
    /// sort after it.
    pub fn validate(&self) -> Result<()> {
        let HabitRange { start, end } = &self.habit_range;
        if start.is_empty() {
            return Err(Error::Config {
                reason: "habit_range.start must not be empty".to_string(),
            });
        }
        if end <= start {
            return Err(Error::Config {
                reason: format!(
                    "habit_range.end '{}' must sort after habit_range.start '{}'",
                    end, start
                ),
            });
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Habit ledger contract configuration
#
# What changeHabitOwner / changeHabitAttendees do when the key holds no habit:
#   "reject"   = fail with "habit not found" and write nothing (default)
#   "tolerate" = start from an empty habit, apply the change and write it
missing_records = "reject"

# Keys listed by queryAllHabits: start <= key < end (lexical order)
[habit_range]
start = "HABIT0"
end = "HABIT999"
"#
    }

    /// Parse and validate config text.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the text is not valid TOML for this config or
    /// fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ContractConfig = toml::from_str(content).map_err(|e| Error::Config {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            reason: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config { reason } => Error::Config {
                reason: format!("'{}': {}", path.display(), reason),
            },
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| Error::Config {
                reason: format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ),
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| Error::Config {
            reason: format!("Failed to serialize config: {}", e),
        })?;
        std::fs::write(path, content).map_err(|e| Error::Config {
            reason: format!("Failed to write config file '{}': {}", path.display(), e),
        })
    }
}
