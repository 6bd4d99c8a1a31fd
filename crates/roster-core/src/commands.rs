//! Mutation commands
//!
//! Every store mutation can be expressed as a `Command` and run through
//! [`apply`](crate::apply::apply). Queries are not commands.

use serde::{Deserialize, Serialize};

use crate::model::EmployeeRecord;
use crate::ops::{FieldUpdate, FieldValue, UpdatableField};

/// A store mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command<Id> {
    /// Insert or replace a record
    Add(EmployeeRecord<Id>),

    /// Remove a record and return it
    Remove { employee_id: Id },

    /// Remove a record
    Delete { employee_id: Id },

    /// Typed single-field update
    Update { employee_id: Id, update: FieldUpdate },

    /// Field-name plus untyped value update
    UpdateField {
        employee_id: Id,
        field: String,
        value: FieldValue,
    },

    /// Raise salaries of records rated at least `min_rating`
    GiveRaise { min_rating: f64, raise_percent: f64 },
}

/// What a successful command did
#[derive(Debug, Clone, PartialEq)]
pub enum Applied<Id> {
    Added { employee_id: Id },
    Removed(EmployeeRecord<Id>),
    Deleted { employee_id: Id },
    Updated { employee_id: Id, field: UpdatableField },
    Raised { count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_clone() {
        let cmd1 = Command::Update {
            employee_id: 102_u32,
            update: FieldUpdate::Salary(70_000.0),
        };

        let cmd2 = cmd1.clone();
        assert_eq!(cmd1, cmd2);
    }

    #[test]
    fn test_command_serializes_with_variant_name() {
        let cmd: Command<String> = Command::Delete {
            employee_id: "EMP001".to_string(),
        };

        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["Delete"]["employee_id"], "EMP001");
    }
}
