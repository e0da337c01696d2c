//! Configuration Loading Tests
//!
//! A contract built from a `hapit.toml` on disk behaves as configured.

use crate::common::*;
use hapit::{ContractConfig, HabitContract, MemoryStore, MissingRecordPolicy, CONFIG_FILE_NAME};
use tempfile::TempDir;

fn contract_from(toml: &str) -> HabitContract {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, toml).unwrap();
    HabitContract::new(ContractConfig::from_file(&path).unwrap())
}

#[test]
fn default_file_gives_default_contract() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    ContractConfig::write_default_if_missing(&path).unwrap();

    let config = ContractConfig::from_file(&path).unwrap();
    let contract = HabitContract::new(config);

    assert_eq!(contract.executor().config(), &ContractConfig::default());
}

#[test]
fn tolerate_policy_from_file() {
    let contract = contract_from("missing_records = \"tolerate\"\n");
    let store = MemoryStore::new();

    assert_eq!(
        contract.executor().config().missing_records,
        MissingRecordPolicy::Tolerate
    );
    invoke_ok(&contract, &store, "changeHabitOwner", &["ghost", "X"]);
    assert_eq!(store.keys(), vec!["ghost"]);
}

#[test]
fn narrowed_range_from_file() {
    let contract = contract_from("[habit_range]\nstart = \"HABIT3\"\nend = \"HABIT5\"\n");
    let store = MemoryStore::new();
    invoke_ok(&contract, &store, "initLedger", &[]);

    let listing = payload_json(&invoke_ok(&contract, &store, "queryAllHabits", &[]));
    let keys: Vec<&str> = listing
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["Key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["HABIT3", "HABIT4"]);
}

#[test]
fn invalid_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "missing_records = 42\n").unwrap();

    let err = ContractConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().starts_with("invalid configuration"));
}
