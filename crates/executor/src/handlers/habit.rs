//! Single-habit command handlers.
//!
//! Each mutating handler performs at most one read and exactly one write.

use hapit_core::{Habit, StateStore};

use crate::config::MissingRecordPolicy;
use crate::{Error, Output, Result};

/// Handle QueryHabit command.
pub fn query_habit(store: &dyn StateStore, key: String) -> Result<Output> {
    let bytes = store.get_state(&key)?;
    Ok(Output::Record(bytes))
}

/// Handle CreateHabit command.
pub fn create_habit(
    store: &dyn StateStore,
    key: String,
    name: String,
    habit_type: String,
    first_attendee: String,
    owner: String,
) -> Result<Output> {
    let habit = Habit::new(name, habit_type, vec![first_attendee], owner);
    put_habit(store, &key, &habit)?;
    Ok(Output::Unit)
}

/// Handle ChangeHabitOwner command.
pub fn change_habit_owner(
    store: &dyn StateStore,
    policy: MissingRecordPolicy,
    key: String,
    new_owner: String,
) -> Result<Output> {
    let mut habit = load_habit(store, policy, &key)?;
    habit.owner = new_owner;
    put_habit(store, &key, &habit)?;
    Ok(Output::Unit)
}

/// Handle ChangeHabitAttendees command.
pub fn change_habit_attendees(
    store: &dyn StateStore,
    policy: MissingRecordPolicy,
    key: String,
    new_attendee: String,
) -> Result<Output> {
    let mut habit = load_habit(store, policy, &key)?;
    habit.attendees.push(new_attendee);
    put_habit(store, &key, &habit)?;
    Ok(Output::Unit)
}

// =============================================================================
// Helpers
// =============================================================================

/// Read and decode the habit at `key` for mutation.
fn load_habit(store: &dyn StateStore, policy: MissingRecordPolicy, key: &str) -> Result<Habit> {
    match (store.get_state(key)?, policy) {
        (Some(bytes), MissingRecordPolicy::Reject) => Ok(Habit::from_bytes(&bytes)?),
        (None, MissingRecordPolicy::Reject) => Err(Error::NotFound {
            key: key.to_string(),
        }),
        (Some(bytes), MissingRecordPolicy::Tolerate) => {
            Ok(Habit::from_bytes(&bytes).unwrap_or_else(|e| {
                tracing::warn!(
                    target: "hapit::executor",
                    key,
                    error = %e,
                    "Malformed habit replaced with empty record"
                );
                Habit::default()
            }))
        }
        (None, MissingRecordPolicy::Tolerate) => {
            tracing::warn!(target: "hapit::executor", key, "Missing habit created from empty record");
            Ok(Habit::default())
        }
    }
}

fn put_habit(store: &dyn StateStore, key: &str, habit: &Habit) -> Result<()> {
    store.put_state(key, habit.to_bytes()?)?;
    Ok(())
}
