//! Error conversion from lower-layer error types.
//!
//! Store and codec failures are mapped onto the executor's [`Error`] so
//! handlers can use `?` throughout.

use crate::Error;
use hapit_core::StoreError;

/// Store errors keep their message text unchanged.
impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Error::Store {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            reason: err.to_string(),
        }
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Serialization {
            reason: err.to_string(),
        }
    }
}
