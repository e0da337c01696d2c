//! Storage layer for the habit ledger
//!
//! This crate implements an in-memory stand-in for the host runtime's state
//! store:
//! - MemoryStore: BTreeMap-based storage behind a `parking_lot::RwLock`
//! - Lexical range scans over a point-in-time copy of the range
//! - Open-scan and write accounting, so callers can check that iterators are
//!   released and that rejected invocations wrote nothing

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;

pub use memory::MemoryStore;
