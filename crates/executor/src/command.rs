//! Command enum defining all contract operations.
//!
//! Commands are the "instruction set" of the contract. Every operation that
//! can be invoked against the ledger is represented as a variant of this
//! enum, and every host function name maps to exactly one [`Function`].
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Closed**: Dispatch is an exhaustive match, there is no fallthrough

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Host-visible function names.
///
/// The mapping from name to function is an exact, case-sensitive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Function {
    /// `queryHabit`
    QueryHabit,
    /// `initLedger`
    InitLedger,
    /// `createHabit`
    CreateHabit,
    /// `queryAllHabits`
    QueryAllHabits,
    /// `changeHabitOwner`
    ChangeHabitOwner,
    /// `changeHabitAttendees`
    ChangeHabitAttendees,
}

impl Function {
    /// Every function, in dispatch-table order.
    pub const ALL: [Function; 6] = [
        Function::QueryHabit,
        Function::InitLedger,
        Function::CreateHabit,
        Function::QueryAllHabits,
        Function::ChangeHabitOwner,
        Function::ChangeHabitAttendees,
    ];

    /// The name the host invokes this function by.
    pub fn name(self) -> &'static str {
        match self {
            Function::QueryHabit => "queryHabit",
            Function::InitLedger => "initLedger",
            Function::CreateHabit => "createHabit",
            Function::QueryAllHabits => "queryAllHabits",
            Function::ChangeHabitOwner => "changeHabitOwner",
            Function::ChangeHabitAttendees => "changeHabitAttendees",
        }
    }

    /// Look up a function by its host name.
    pub fn from_name(name: &str) -> Option<Function> {
        Function::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Required argument count, or `None` if arguments are ignored.
    pub fn arity(self) -> Option<usize> {
        match self {
            Function::QueryHabit => Some(1),
            Function::CreateHabit => Some(5),
            Function::ChangeHabitOwner | Function::ChangeHabitAttendees => Some(2),
            Function::InitLedger | Function::QueryAllHabits => None,
        }
    }

    fn check_arity(self, actual: usize) -> Result<()> {
        match self.arity() {
            Some(expected) if expected != actual => Err(Error::ArgumentCount { expected, actual }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A command is a self-contained, serializable operation.
///
/// # Example
///
/// ```ignore
/// use hapit_executor::Command;
///
/// let cmd = Command::from_invocation(
///     "changeHabitOwner",
///     vec!["HABIT0".into(), "Ruby".into()],
/// )?;
/// assert_eq!(cmd, Command::ChangeHabitOwner {
///     key: "HABIT0".into(),
///     new_owner: "Ruby".into(),
/// });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Read the raw bytes stored at a key.
    /// Returns: `Output::Record`
    QueryHabit { key: String },

    /// Write the fixed seed habits and people.
    /// Returns: `Output::Unit`
    InitLedger,

    /// Create (or overwrite) a habit with a single attendee.
    /// Returns: `Output::Unit`
    CreateHabit {
        key: String,
        name: String,
        habit_type: String,
        first_attendee: String,
        owner: String,
    },

    /// List every habit in the configured key range.
    /// Returns: `Output::Habits`
    QueryAllHabits,

    /// Replace a habit's owner.
    /// Returns: `Output::Unit`
    ChangeHabitOwner { key: String, new_owner: String },

    /// Append an attendee to a habit.
    /// Returns: `Output::Unit`
    ChangeHabitAttendees { key: String, new_attendee: String },
}

impl Command {
    /// Build a command from a host function name and positional arguments.
    ///
    /// # Errors
    ///
    /// - `UnknownFunction` if the name is not in the dispatch table
    /// - `ArgumentCount` if the function takes a fixed number of arguments
    ///   and a different number was supplied
    pub fn from_invocation(function: &str, args: Vec<String>) -> Result<Command> {
        let func = Function::from_name(function).ok_or_else(|| Error::UnknownFunction {
            name: function.to_string(),
        })?;
        func.check_arity(args.len())?;

        let mut args = args.into_iter();
        let mut next = move || args.next().unwrap_or_default();

        Ok(match func {
            Function::QueryHabit => Command::QueryHabit { key: next() },
            Function::InitLedger => Command::InitLedger,
            Function::CreateHabit => Command::CreateHabit {
                key: next(),
                name: next(),
                habit_type: next(),
                first_attendee: next(),
                owner: next(),
            },
            Function::QueryAllHabits => Command::QueryAllHabits,
            Function::ChangeHabitOwner => Command::ChangeHabitOwner {
                key: next(),
                new_owner: next(),
            },
            Function::ChangeHabitAttendees => Command::ChangeHabitAttendees {
                key: next(),
                new_attendee: next(),
            },
        })
    }

    /// The function this command executes.
    pub fn function(&self) -> Function {
        match self {
            Command::QueryHabit { .. } => Function::QueryHabit,
            Command::InitLedger => Function::InitLedger,
            Command::CreateHabit { .. } => Function::CreateHabit,
            Command::QueryAllHabits => Function::QueryAllHabits,
            Command::ChangeHabitOwner { .. } => Function::ChangeHabitOwner,
            Command::ChangeHabitAttendees { .. } => Function::ChangeHabitAttendees,
        }
    }

    /// The state key this command targets, if it targets exactly one.
    pub fn key(&self) -> Option<&str> {
        match self {
            Command::QueryHabit { key }
            | Command::CreateHabit { key, .. }
            | Command::ChangeHabitOwner { key, .. }
            | Command::ChangeHabitAttendees { key, .. } => Some(key.as_str()),
            Command::InitLedger | Command::QueryAllHabits => None,
        }
    }

    /// True if executing this command writes to the store.
    pub fn is_write(&self) -> bool {
        !matches!(self, Command::QueryHabit { .. } | Command::QueryAllHabits)
    }
}
