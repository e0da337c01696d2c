//! Command handlers organized by scope.
//!
//! | Module | Commands | Touches |
//! |--------|----------|---------|
//! | `habit` | 4 | A single habit key |
//! | `ledger` | 2 | The seed key set or the habit range |

pub mod habit;
pub mod ledger;
