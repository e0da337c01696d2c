//! # Hapit Executor
//!
//! The public API of the habit ledger contract. It provides:
//! - [`HabitContract`] - The [`Contract`] a host runtime invokes
//! - [`Command`]/[`Output`] - Low-level command interface
//! - [`Executor`] - Stateless dispatch of commands against a [`StateStore`]
//!
//! ## Quick Start
//!
//! ```text
//! use hapit_executor::{Contract, HabitContract, Invocation};
//! use hapit_storage::MemoryStore;
//!
//! let contract = HabitContract::default();
//! let store = MemoryStore::new();
//!
//! contract.invoke(&store, Invocation::new("initLedger", vec![]));
//! let response = contract.invoke(&store, Invocation::new("queryHabit", vec!["HABIT0".into()]));
//! assert!(response.is_success());
//! ```
//!
//! ## Functions
//!
//! | Function | Arguments | Effect |
//! |----------|-----------|--------|
//! | `queryHabit` | key | Return the stored bytes |
//! | `initLedger` | - | Write the seed habits and people |
//! | `createHabit` | key, name, type, firstAttendee, owner | Write a new habit |
//! | `queryAllHabits` | - | List habits in the configured range |
//! | `changeHabitOwner` | key, newOwner | Replace the owner |
//! | `changeHabitAttendees` | key, newAttendee | Append an attendee |

#![warn(missing_docs)]

mod command;
mod config;
mod contract;
mod convert;
mod error;
mod executor;
mod output;
mod seed;
mod types;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use command::{Command, Function};
pub use config::{
    ContractConfig, HabitRange, MissingRecordPolicy, CONFIG_FILE_NAME, DEFAULT_RANGE_END,
    DEFAULT_RANGE_START,
};
pub use contract::{Contract, HabitContract, Invocation, Response, STATUS_ERROR, STATUS_OK};
pub use error::Error;
pub use executor::Executor;
pub use output::Output;
pub use seed::{
    habit_key, person_key, seed_habits, seed_people, HABIT_KEY_PREFIX, PERSON_KEY_PREFIX,
};
pub use types::HabitRecord;

// Re-export core types so users don't need hapit-core directly
pub use hapit_core::{
    Habit, KeyValue, Person, RangeScan, StateIterator, StateStore, StoreError, StoreResult,
};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
