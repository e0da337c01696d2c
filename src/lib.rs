//! Hapit - habit ledger contract
//!
//! A small contract that stores, queries and mutates habit records on a
//! replicated key-value ledger owned by a host runtime. The host orders and
//! authenticates invocations; this crate validates arguments, encodes
//! records as JSON and reads or writes the host's state store.
//!
//! # Quick Start
//!
//! ```ignore
//! use hapit::{Contract, HabitContract, Invocation, MemoryStore};
//!
//! let contract = HabitContract::default();
//! let store = MemoryStore::new();
//!
//! contract.invoke(&store, Invocation::new("initLedger", vec![]));
//! let response = contract.invoke(&store, Invocation::new("queryAllHabits", vec![]));
//! assert!(response.is_success());
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which dispatches a closed
//! [`Command`] enum. [`HabitContract`] adapts host invocations (function name
//! plus string arguments) to commands and outputs to [`Response`]s.

// Re-export the public API from hapit-executor
pub use hapit_executor::*;

// In-memory state store for embedding and tests
pub use hapit_storage::MemoryStore;
