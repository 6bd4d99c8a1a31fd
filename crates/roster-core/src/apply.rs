//! Command boundary
//!
//! ## Atomicity Contract
//!
//! `apply()` guarantees:
//! - **All-or-nothing**: either the command succeeds in full, or it fails
//!   and the store's visible records are exactly as before
//! - **No panics**: invalid input returns typed errors
//!
//! ## Example
//!
//! ```
//! use roster_core::{apply, Applied, Command, EmployeeRecord, EmployeeStore};
//!
//! let mut store = EmployeeStore::new();
//! let record = EmployeeRecord::new(101_u32, "Alice Smith", "IT", 75_000.0, 4.6, 5, true);
//!
//! let applied = apply(&mut store, Command::Add(record)).unwrap();
//! assert_eq!(applied, Applied::Added { employee_id: 101 });
//! ```

use std::fmt::Display;
use std::hash::Hash;

use crate::commands::{Applied, Command};
use crate::errors::Result;
use crate::observer::StoreObserver;
use crate::ops::EmployeeStore;

/// Run one command against the store
///
/// # Errors
///
/// Returns the `RosterError` of the underlying store operation; the store is
/// unchanged in that case.
pub fn apply<Id, O>(store: &mut EmployeeStore<Id, O>, cmd: Command<Id>) -> Result<Applied<Id>>
where
    Id: Eq + Hash + Clone + Display,
    O: StoreObserver,
{
    match cmd {
        Command::Add(record) => {
            let employee_id = record.id.clone();
            store.add(record)?;
            Ok(Applied::Added { employee_id })
        }

        Command::Remove { employee_id } => {
            let record = store.remove(&employee_id)?;
            Ok(Applied::Removed(record))
        }

        Command::Delete { employee_id } => {
            store.delete(&employee_id)?;
            Ok(Applied::Deleted { employee_id })
        }

        Command::Update {
            employee_id,
            update,
        } => {
            let field = update.field();
            store.update(&employee_id, update)?;
            Ok(Applied::Updated { employee_id, field })
        }

        Command::UpdateField {
            employee_id,
            field,
            value,
        } => {
            let field = store.update_field(&employee_id, &field, value)?;
            Ok(Applied::Updated { employee_id, field })
        }

        Command::GiveRaise {
            min_rating,
            raise_percent,
        } => {
            let count = store.give_raise_to_high_performers(min_rating, raise_percent)?;
            Ok(Applied::Raised { count })
        }
    }
}
