//! Executor Layer Tests
//!
//! Tests for the hapit-executor crate through the public facade:
//! - HabitContract - host invocation boundary
//! - Command/Output - the instruction set and its results
//! - ContractConfig - configuration loading
//! - Store failures and range-scan release

mod common;

mod config_loading;
mod properties;
