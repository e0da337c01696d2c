//! Core types and traits for the habit ledger
//!
//! This crate defines the foundational types shared by the storage backend
//! and the executor:
//! - Habit / Person: the two record shapes persisted as JSON
//! - KeyValue: a single entry yielded by a range scan
//! - StoreError: errors raised by a state-store implementation
//! - Traits: the state-store capability (StateStore, StateIterator)
//! - RangeScan: scoped range-scan handle that always closes its iterator

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use traits::{RangeScan, StateIterator, StateStore};
pub use types::{Habit, KeyValue, Person};
