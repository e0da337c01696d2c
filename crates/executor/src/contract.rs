//! Invocation boundary between the host runtime and the executor.
//!
//! The host delivers an already-ordered invocation (function name plus
//! string arguments) together with a state-store handle, and expects a
//! [`Response`] back: a status, an optional payload and an error message.

use serde::{Deserialize, Serialize};

use hapit_core::StateStore;

use crate::config::ContractConfig;
use crate::{Command, Executor, Output};

/// Status code of a successful response.
pub const STATUS_OK: i32 = 200;

/// Status code of a failed response.
pub const STATUS_ERROR: i32 = 500;

/// Result of an invocation as returned to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// `STATUS_OK` or `STATUS_ERROR`
    pub status: i32,
    /// Operation output, empty for writes and failures
    pub payload: Vec<u8>,
    /// Human-readable error, empty on success
    pub message: String,
}

impl Response {
    /// Successful response carrying `payload`.
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: STATUS_OK,
            payload,
            message: String::new(),
        }
    }

    /// Failed response carrying `message`.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            payload: Vec::new(),
            message: message.into(),
        }
    }

    /// True if the invocation succeeded.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// A function name and its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Name of the function to run
    pub function: String,
    /// Positional arguments
    pub args: Vec<String>,
}

impl Invocation {
    /// Create an invocation.
    pub fn new(function: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            function: function.into(),
            args,
        }
    }

    /// Split a host argument vector whose first element is the function name.
    ///
    /// An empty vector yields an empty function name, which fails dispatch.
    pub fn from_args(raw: Vec<String>) -> Self {
        let mut raw = raw.into_iter();
        let function = raw.next().unwrap_or_default();
        Self {
            function,
            args: raw.collect(),
        }
    }
}

/// Entry points the host runtime calls.
pub trait Contract {
    /// Called once when the contract is instantiated.
    fn init(&self, stub: &dyn StateStore, args: &[String]) -> Response;

    /// Called for every transaction addressed to the contract.
    fn invoke(&self, stub: &dyn StateStore, invocation: Invocation) -> Response;
}

/// The habit ledger contract.
#[derive(Debug, Clone, Default)]
pub struct HabitContract {
    executor: Executor,
}

impl HabitContract {
    /// Create a contract with the given configuration.
    pub fn new(config: ContractConfig) -> Self {
        Self {
            executor: Executor::new(config),
        }
    }

    /// The executor behind this contract.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }
}

impl Contract for HabitContract {
    /// Seeding is a separate `initLedger` invocation, so this does nothing.
    fn init(&self, _stub: &dyn StateStore, _args: &[String]) -> Response {
        Response::success(Vec::new())
    }

    fn invoke(&self, stub: &dyn StateStore, invocation: Invocation) -> Response {
        let Invocation { function, args } = invocation;
        let result = Command::from_invocation(&function, args)
            .and_then(|cmd| self.executor.execute(stub, cmd))
            .and_then(Output::into_payload);

        match result {
            Ok(payload) => Response::success(payload),
            Err(e) => {
                tracing::debug!(target: "hapit::executor", function = %function, error = %e, "Invocation failed");
                Response::error(e.to_string())
            }
        }
    }
}
