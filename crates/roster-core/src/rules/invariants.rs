use std::hash::Hash;

use crate::ops::EmployeeStore;
use crate::rules::validation;

/// A stored record breaking one of the store invariants
#[derive(Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    /// Record salary is negative or not finite
    InvalidSalary { employee_id: String, salary: f64 },
    /// Record department is empty or blank
    BlankDepartment { employee_id: String },
    /// Map key differs from the record's own id
    KeyMismatch { key: String, employee_id: String },
}

/// Find records whose salary is negative or not finite
pub fn find_invalid_salaries<Id: ToString, O>(store: &EmployeeStore<Id, O>) -> Vec<(String, f64)> {
    store
        .iter()
        .filter(|e| validation::validate_salary(e.salary).is_err())
        .map(|e| (e.id.to_string(), e.salary))
        .collect()
}

/// Find records with a blank department
pub fn find_blank_departments<Id: ToString, O>(store: &EmployeeStore<Id, O>) -> Vec<String> {
    store
        .iter()
        .filter(|e| validation::validate_department(&e.department).is_err())
        .map(|e| e.id.to_string())
        .collect()
}

/// Find map entries whose key is not the record's id
pub fn find_key_mismatches<Id: Eq + Hash + ToString, O>(
    store: &EmployeeStore<Id, O>,
) -> Vec<(String, String)> {
    store
        .employees
        .iter()
        .filter(|(key, record)| **key != record.id)
        .map(|(key, record)| (key.to_string(), record.id.to_string()))
        .collect()
}

/// Run every invariant check and collect all violations
pub fn find_violations<Id: Eq + Hash + ToString, O>(
    store: &EmployeeStore<Id, O>,
) -> Vec<InvariantViolation> {
    let mut violations: Vec<InvariantViolation> = find_invalid_salaries(store)
        .into_iter()
        .map(|(employee_id, salary)| InvariantViolation::InvalidSalary {
            employee_id,
            salary,
        })
        .collect();

    violations.extend(
        find_blank_departments(store)
            .into_iter()
            .map(|employee_id| InvariantViolation::BlankDepartment { employee_id }),
    );

    violations.extend(
        find_key_mismatches(store)
            .into_iter()
            .map(|(key, employee_id)| InvariantViolation::KeyMismatch { key, employee_id }),
    );

    violations
}
