//! The Executor - single entry point to the contract's operations.
//!
//! The Executor is a stateless dispatcher that routes commands to the
//! appropriate handler and returns their outputs.

use hapit_core::StateStore;

use crate::config::ContractConfig;
use crate::handlers::{habit, ledger};
use crate::{Command, Output, Result};

/// The command executor.
///
/// The Executor is **stateless** with respect to the ledger: it holds only
/// configuration. The state store is passed in on every call and nothing
/// read from it is cached across calls.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads.
///
/// # Example
///
/// ```ignore
/// use hapit_executor::{Command, ContractConfig, Executor};
/// use hapit_storage::MemoryStore;
///
/// let executor = Executor::new(ContractConfig::default());
/// let store = MemoryStore::new();
///
/// executor.execute(&store, Command::InitLedger)?;
///
/// let results = executor.execute_many(&store, vec![
///     Command::QueryHabit { key: "HABIT0".into() },
///     Command::QueryAllHabits,
/// ]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Executor {
    config: ContractConfig,
}

impl Executor {
    /// Create a new executor with the given configuration.
    pub fn new(config: ContractConfig) -> Self {
        Self { config }
    }

    /// The configuration this executor runs with.
    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    /// Execute a single command against a state store.
    ///
    /// Returns the command result or an error.
    pub fn execute(&self, store: &dyn StateStore, cmd: Command) -> Result<Output> {
        tracing::debug!(
            target: "hapit::executor",
            function = %cmd.function(),
            key = cmd.key().unwrap_or_default(),
            "Executing command"
        );

        let policy = self.config.missing_records;
        match cmd {
            Command::QueryHabit { key } => habit::query_habit(store, key),
            Command::InitLedger => ledger::init_ledger(store),
            Command::CreateHabit {
                key,
                name,
                habit_type,
                first_attendee,
                owner,
            } => habit::create_habit(store, key, name, habit_type, first_attendee, owner),
            Command::QueryAllHabits => ledger::query_all_habits(store, &self.config.habit_range),
            Command::ChangeHabitOwner { key, new_owner } => {
                habit::change_habit_owner(store, policy, key, new_owner)
            }
            Command::ChangeHabitAttendees { key, new_attendee } => {
                habit::change_habit_attendees(store, policy, key, new_attendee)
            }
        }
    }

    /// Execute multiple commands sequentially against one store.
    ///
    /// Returns all results in the same order as the input commands.
    /// Execution continues even if some commands fail.
    pub fn execute_many(&self, store: &dyn StateStore, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(store, cmd)).collect()
    }
}
