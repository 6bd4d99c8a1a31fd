use roster_core::{EmployeeRecord, EmployeeStore, NoopObserver, StoreObserver};

/// Create a new empty store that discards events
#[allow(dead_code)]
pub fn new_store<Id>() -> EmployeeStore<Id, NoopObserver> {
    EmployeeStore::with_observer(NoopObserver)
}

#[allow(dead_code)]
pub fn alice() -> EmployeeRecord<u32> {
    EmployeeRecord::new(101, "Alice Smith", "IT", 75_000.0, 4.6, 5, true)
}

#[allow(dead_code)]
pub fn bob() -> EmployeeRecord<u32> {
    EmployeeRecord::new(102, "Bob Johnson", "HR", 65_000.0, 4.2, 3, true)
}

#[allow(dead_code)]
pub fn charlie() -> EmployeeRecord<u32> {
    EmployeeRecord::new(103, "Charlie Brown", "IT", 80_000.0, 4.8, 7, true)
}

/// Store seeded with Alice, Bob and Charlie (integer ids)
#[allow(dead_code)]
pub fn seeded_store() -> EmployeeStore<u32, NoopObserver> {
    let mut store = new_store();
    for record in [alice(), bob(), charlie()] {
        store.add(record).unwrap();
    }
    store
}

/// Same store shape with an injected observer
#[allow(dead_code)]
pub fn seeded_store_with<O: StoreObserver>(observer: O) -> EmployeeStore<u32, O> {
    let mut store = EmployeeStore::with_observer(observer);
    for record in [alice(), bob(), charlie()] {
        store.add(record).unwrap();
    }
    store
}

/// String-keyed record
#[allow(dead_code)]
pub fn emp(
    id: &str,
    name: &str,
    department: &str,
    salary: f64,
    rating: f64,
    years: u32,
) -> EmployeeRecord<String> {
    EmployeeRecord::new(id.to_string(), name, department, salary, rating, years, true)
}

/// Store seeded with the EMP001..EMP003 engineering/marketing records
#[allow(dead_code)]
pub fn seeded_string_store() -> EmployeeStore<String, NoopObserver> {
    let mut store = new_store();
    for record in [
        emp("EMP001", "John Doe", "Engineering", 50_000.0, 4.5, 5),
        emp("EMP002", "Jane Smith", "Engineering", 60_000.0, 4.8, 7),
        emp("EMP003", "Bob Johnson", "Marketing", 45_000.0, 4.2, 3),
    ] {
        store.add(record).unwrap();
    }
    store
}

/// Ids of records in the order returned
#[allow(dead_code)]
pub fn ids<Id: Clone>(records: &[&EmployeeRecord<Id>]) -> Vec<Id> {
    records.iter().map(|e| e.id.clone()).collect()
}

/// Ids sorted, for order-insensitive comparisons
#[allow(dead_code)]
pub fn sorted_ids<Id: Clone + Ord>(records: &[&EmployeeRecord<Id>]) -> Vec<Id> {
    let mut out = ids(records);
    out.sort();
    out
}
