//! Ledger-wide command handlers: seeding and range listing.

use hapit_core::StateStore;

use crate::config::HabitRange;
use crate::seed::{habit_key, person_key, seed_habits, seed_people};
use crate::types::HabitRecord;
use crate::{Output, Result};

/// Handle InitLedger command.
///
/// Overwrites every seed key; running it again leaves the same state.
pub fn init_ledger(store: &dyn StateStore) -> Result<Output> {
    let habits = seed_habits();
    let people = seed_people();

    for (i, habit) in habits.iter().enumerate() {
        store.put_state(&habit_key(i), habit.to_bytes()?)?;
    }
    for (i, person) in people.iter().enumerate() {
        store.put_state(&person_key(i), person.to_bytes()?)?;
    }

    tracing::info!(
        target: "hapit::executor",
        habits = habits.len(),
        people = people.len(),
        "Seeded ledger"
    );
    Ok(Output::Unit)
}

/// Handle QueryAllHabits command.
///
/// Any scan or decode error aborts the listing; the scan is closed on every
/// path.
pub fn query_all_habits(store: &dyn StateStore, range: &HabitRange) -> Result<Output> {
    let mut scan = store.range_scan(&range.start, &range.end)?;

    let mut records = Vec::new();
    for entry in scan.by_ref() {
        records.push(HabitRecord::from_entry(entry?)?);
    }
    scan.close()?;

    tracing::debug!(target: "hapit::executor", count = records.len(), "Listed habits");
    Ok(Output::Habits(records))
}
