use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// One employee's stored attributes
///
/// `Id` is chosen by the caller: a numeric badge number, a string code or a
/// generated UUID all work. The store keys records by `id` and never changes
/// it after insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord<Id> {
    /// Unique identifier, immutable once stored
    pub id: Id,

    /// Display name
    pub name: String,

    /// Department name; matched case-insensitively, never blank in a store
    pub department: String,

    /// Annual salary, never negative in a store
    pub salary: f64,

    /// Performance score (open range)
    pub performance_rating: f64,

    pub years_of_experience: u32,

    pub active: bool,
}

impl<Id> EmployeeRecord<Id> {
    pub fn new(
        id: Id,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
        performance_rating: f64,
        years_of_experience: u32,
        active: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
            salary,
            performance_rating,
            years_of_experience,
            active,
        }
    }

    /// Case-insensitive department equality
    pub fn in_department(&self, department: &str) -> bool {
        self.department.to_lowercase() == department.to_lowercase()
    }

    /// Case-insensitive substring match on the name
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Natural ordering of records: ascending years of experience
    pub fn cmp_by_experience(&self, other: &Self) -> Ordering {
        self.years_of_experience.cmp(&other.years_of_experience)
    }

    /// Descending salary ordering
    pub fn cmp_by_salary_desc(&self, other: &Self) -> Ordering {
        other.salary.total_cmp(&self.salary)
    }

    /// Descending performance ordering
    pub fn cmp_by_performance_desc(&self, other: &Self) -> Ordering {
        other.performance_rating.total_cmp(&self.performance_rating)
    }
}
