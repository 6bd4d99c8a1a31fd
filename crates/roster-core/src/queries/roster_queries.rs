use crate::model::EmployeeRecord;
use crate::ops::EmployeeStore;

/// Size of the "top paid" list when the caller does not choose one
pub const DEFAULT_TOP_PAID: usize = 5;

/// Rating threshold of the stock "raise for high performers" action
pub const DEFAULT_RAISE_MIN_RATING: f64 = 4.5;

/// Percentage of the stock "raise for high performers" action
pub const DEFAULT_RAISE_PERCENT: f64 = 10.0;

impl<Id, O> EmployeeStore<Id, O> {
    fn matching<F>(&self, predicate: F) -> Vec<&EmployeeRecord<Id>>
    where
        F: Fn(&EmployeeRecord<Id>) -> bool,
    {
        self.employees.values().filter(|e| predicate(*e)).collect()
    }

    fn sorted_by<F>(&self, compare: F) -> Vec<&EmployeeRecord<Id>>
    where
        F: Fn(&EmployeeRecord<Id>, &EmployeeRecord<Id>) -> std::cmp::Ordering,
    {
        let mut all = self.list_all();
        all.sort_by(|a, b| compare(*a, *b));
        all
    }

    /// Records whose department equals `department`, ignoring case
    pub fn search_by_department(&self, department: &str) -> Vec<&EmployeeRecord<Id>> {
        self.matching(|e| e.in_department(department))
    }

    /// Records whose name contains `needle`, ignoring case
    pub fn search_by_name(&self, needle: &str) -> Vec<&EmployeeRecord<Id>> {
        self.matching(|e| e.name_contains(needle))
    }

    /// Records matching `term` by name substring or by department
    ///
    /// Each record appears once even when it matches both ways.
    pub fn search(&self, term: &str) -> Vec<&EmployeeRecord<Id>> {
        self.matching(|e| e.name_contains(term) || e.in_department(term))
    }

    /// Records rated at least `min_rating`
    pub fn filter_by_performance(&self, min_rating: f64) -> Vec<&EmployeeRecord<Id>> {
        self.matching(|e| e.performance_rating >= min_rating)
    }

    /// Records with `min <= salary <= max`
    ///
    /// An inverted range (`min > max`) matches nothing.
    pub fn filter_by_salary_range(&self, min: f64, max: f64) -> Vec<&EmployeeRecord<Id>> {
        self.matching(|e| e.salary >= min && e.salary <= max)
    }

    /// All records, highest salary first
    pub fn sort_by_salary(&self) -> Vec<&EmployeeRecord<Id>> {
        self.sorted_by(EmployeeRecord::cmp_by_salary_desc)
    }

    /// All records, highest rating first
    pub fn sort_by_performance(&self) -> Vec<&EmployeeRecord<Id>> {
        self.sorted_by(EmployeeRecord::cmp_by_performance_desc)
    }

    /// All records, fewest years of experience first
    pub fn sort_by_experience(&self) -> Vec<&EmployeeRecord<Id>> {
        self.sorted_by(EmployeeRecord::cmp_by_experience)
    }

    /// Up to `n` records, highest salary first
    pub fn top_paid(&self, n: usize) -> Vec<&EmployeeRecord<Id>> {
        let mut ranked = self.sort_by_salary();
        ranked.truncate(n);
        ranked
    }

    /// Mean salary of a department (case-insensitive); `0.0` when it has no records
    pub fn average_salary_by_department(&self, department: &str) -> f64 {
        let salaries: Vec<f64> = self
            .search_by_department(department)
            .iter()
            .map(|e| e.salary)
            .collect();

        if salaries.is_empty() {
            return 0.0;
        }
        salaries.iter().sum::<f64>() / salaries.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoopObserver;

    fn store() -> EmployeeStore<u32, NoopObserver> {
        let mut store = EmployeeStore::with_observer(NoopObserver);
        store
            .add(EmployeeRecord::new(101, "Alice Smith", "IT", 75_000.0, 4.6, 5, true))
            .unwrap();
        store
            .add(EmployeeRecord::new(102, "Bob Johnson", "HR", 65_000.0, 4.1, 3, true))
            .unwrap();
        store
            .add(EmployeeRecord::new(103, "Charlie Davis", "Finance", 82_000.0, 4.9, 7, false))
            .unwrap();
        store
    }

    fn ids(records: &[&EmployeeRecord<u32>]) -> Vec<u32> {
        records.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_sorts() {
        let store = store();
        assert_eq!(ids(&store.sort_by_salary()), vec![103, 101, 102]);
        assert_eq!(ids(&store.sort_by_performance()), vec![103, 101, 102]);
        assert_eq!(ids(&store.sort_by_experience()), vec![102, 101, 103]);
    }

    #[test]
    fn test_search_matches_name_or_department_once() {
        let mut store = store();
        store
            .add(EmployeeRecord::new(104, "Ita Hr", "HR", 50_000.0, 3.0, 1, true))
            .unwrap();

        let mut found = ids(&store.search("hr"));
        found.sort();
        assert_eq!(found, vec![102, 104]);
    }

    #[test]
    fn test_top_paid_larger_than_store() {
        let store = store();
        assert_eq!(store.top_paid(10).len(), 3);
        assert!(store.top_paid(0).is_empty());
    }

    #[test]
    fn test_inverted_salary_range_is_empty() {
        let store = store();
        assert!(store.filter_by_salary_range(90_000.0, 60_000.0).is_empty());
    }
}
