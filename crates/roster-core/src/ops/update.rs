//! Single-field updates
//!
//! `FieldUpdate` is the typed form used by Rust callers. Untyped callers
//! (a console shell, a form with text boxes) go through
//! [`FieldUpdate::from_dynamic`], which is the only place `UnknownField` and
//! `TypeMismatch` can arise.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, RosterError};
use crate::model::EmployeeRecord;
use crate::rules::validation;

/// The updatable fields of a record (`id` is not one of them)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpdatableField {
    Name,
    Department,
    Salary,
    PerformanceRating,
    YearsOfExperience,
    Active,
}

/// Value kind expected by an updatable field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Number,
    Integer,
    Bool,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Number => "number",
            ValueKind::Integer => "non-negative integer",
            ValueKind::Bool => "boolean",
        }
    }
}

impl UpdatableField {
    pub const ALL: [UpdatableField; 6] = [
        UpdatableField::Name,
        UpdatableField::Department,
        UpdatableField::Salary,
        UpdatableField::PerformanceRating,
        UpdatableField::YearsOfExperience,
        UpdatableField::Active,
    ];

    /// Resolve a field name as typed by a user
    ///
    /// Matching ignores case, underscores and dashes, so `performanceRating`,
    /// `performance_rating` and `PERFORMANCE-RATING` are the same field.
    /// `isActive` is accepted for `active`.
    ///
    /// # Errors
    /// * `UnknownField` - If the name matches no updatable field
    pub fn from_name(name: &str) -> Result<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "name" => Ok(UpdatableField::Name),
            "department" => Ok(UpdatableField::Department),
            "salary" => Ok(UpdatableField::Salary),
            "performancerating" => Ok(UpdatableField::PerformanceRating),
            "yearsofexperience" => Ok(UpdatableField::YearsOfExperience),
            "active" | "isactive" => Ok(UpdatableField::Active),
            _ => Err(RosterError::UnknownField {
                field: name.to_string(),
            }),
        }
    }

    /// Canonical (camelCase) name
    pub fn name(&self) -> &'static str {
        match self {
            UpdatableField::Name => "name",
            UpdatableField::Department => "department",
            UpdatableField::Salary => "salary",
            UpdatableField::PerformanceRating => "performanceRating",
            UpdatableField::YearsOfExperience => "yearsOfExperience",
            UpdatableField::Active => "active",
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            UpdatableField::Name | UpdatableField::Department => ValueKind::Text,
            UpdatableField::Salary | UpdatableField::PerformanceRating => ValueKind::Number,
            UpdatableField::YearsOfExperience => ValueKind::Integer,
            UpdatableField::Active => ValueKind::Bool,
        }
    }
}

impl fmt::Display for UpdatableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Untyped value handed in by a dynamic caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Number(_) => "number",
            FieldValue::Integer(_) => "integer",
            FieldValue::Bool(_) => "boolean",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// A single typed field update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldUpdate {
    Name(String),
    Department(String),
    Salary(f64),
    PerformanceRating(f64),
    YearsOfExperience(u32),
    Active(bool),
}

impl FieldUpdate {
    /// Build a typed update from a field name and an untyped value
    ///
    /// Integers are accepted where a number is expected. Numbers are never
    /// truncated into `yearsOfExperience`.
    ///
    /// # Errors
    /// * `UnknownField` - If `field` names no updatable field
    /// * `TypeMismatch` - If `value` does not fit the field
    pub fn from_dynamic(field: &str, value: FieldValue) -> Result<Self> {
        let target = UpdatableField::from_name(field)?;
        let mismatch = |value: &FieldValue| RosterError::TypeMismatch {
            field: target.name().to_string(),
            expected: target.kind().as_str(),
            found: value.kind_name(),
        };

        let update = match (target, value) {
            (UpdatableField::Name, FieldValue::Text(s)) => FieldUpdate::Name(s),
            (UpdatableField::Department, FieldValue::Text(s)) => FieldUpdate::Department(s),
            (UpdatableField::Salary, FieldValue::Number(n)) => FieldUpdate::Salary(n),
            (UpdatableField::Salary, FieldValue::Integer(i)) => FieldUpdate::Salary(i as f64),
            (UpdatableField::PerformanceRating, FieldValue::Number(n)) => {
                FieldUpdate::PerformanceRating(n)
            }
            (UpdatableField::PerformanceRating, FieldValue::Integer(i)) => {
                FieldUpdate::PerformanceRating(i as f64)
            }
            (UpdatableField::YearsOfExperience, FieldValue::Integer(i)) => {
                let years = u32::try_from(i).map_err(|_| mismatch(&FieldValue::Integer(i)))?;
                FieldUpdate::YearsOfExperience(years)
            }
            (UpdatableField::Active, FieldValue::Bool(b)) => FieldUpdate::Active(b),
            (_, other) => return Err(mismatch(&other)),
        };
        Ok(update)
    }

    pub fn field(&self) -> UpdatableField {
        match self {
            FieldUpdate::Name(_) => UpdatableField::Name,
            FieldUpdate::Department(_) => UpdatableField::Department,
            FieldUpdate::Salary(_) => UpdatableField::Salary,
            FieldUpdate::PerformanceRating(_) => UpdatableField::PerformanceRating,
            FieldUpdate::YearsOfExperience(_) => UpdatableField::YearsOfExperience,
            FieldUpdate::Active(_) => UpdatableField::Active,
        }
    }

    /// Check the new value without touching any record
    ///
    /// # Errors
    /// * `InvalidSalary` - Negative or non-finite salary
    /// * `InvalidDepartment` - Blank department
    pub fn validate(&self) -> Result<()> {
        match self {
            FieldUpdate::Salary(salary) => validation::validate_salary(*salary),
            FieldUpdate::Department(department) => validation::validate_department(department),
            _ => Ok(()),
        }
    }

    /// Write the value into a record; callers validate first
    pub(crate) fn apply_to<Id>(self, record: &mut EmployeeRecord<Id>) {
        match self {
            FieldUpdate::Name(name) => record.name = name,
            FieldUpdate::Department(department) => record.department = department,
            FieldUpdate::Salary(salary) => record.salary = salary,
            FieldUpdate::PerformanceRating(rating) => record.performance_rating = rating,
            FieldUpdate::YearsOfExperience(years) => record.years_of_experience = years,
            FieldUpdate::Active(active) => record.active = active,
        }
    }
}
