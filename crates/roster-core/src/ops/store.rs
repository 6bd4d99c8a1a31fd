use std::collections::HashMap;
use std::fmt::{self, Display};
use std::hash::Hash;
use std::time::Instant;

use roster_core_types::schema::{OP_ADD, OP_DELETE, OP_GIVE_RAISE, OP_REMOVE, OP_UPDATE};

use super::update::{FieldUpdate, FieldValue, UpdatableField};
use crate::errors::{ExError, Result, RosterError};
use crate::model::EmployeeRecord;
use crate::observer::{EventOutcome, StoreEvent, StoreObserver, TracingObserver};
use crate::rules::validation;

/// In-memory employee roster keyed by employee id
///
/// Single-threaded: the store is a plain owned value with no interior
/// locking. Every mutation validates before it writes, so a failed call
/// leaves the visible records exactly as they were.
///
/// Mutation outcomes are reported to the injected observer `O`
/// (`TracingObserver` unless another is supplied).
pub struct EmployeeStore<Id, O = TracingObserver> {
    pub(crate) employees: HashMap<Id, EmployeeRecord<Id>>,
    observer: O,
}

impl<Id, O> fmt::Debug for EmployeeStore<Id, O>
where
    Id: fmt::Debug,
    O: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmployeeStore")
            .field("employees", &self.employees)
            .field("observer", &self.observer)
            .finish()
    }
}

impl<Id: Clone, O: Clone> Clone for EmployeeStore<Id, O> {
    fn clone(&self) -> Self {
        Self {
            employees: self.employees.clone(),
            observer: self.observer.clone(),
        }
    }
}

impl<Id> EmployeeStore<Id, TracingObserver> {
    /// Create an empty store that logs through `tracing`
    pub fn new() -> Self {
        Self {
            employees: HashMap::new(),
            observer: TracingObserver,
        }
    }
}

impl<Id> Default for EmployeeStore<Id, TracingObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id, O> EmployeeStore<Id, O> {
    /// Create an empty store reporting to the given observer
    pub fn with_observer(observer: O) -> Self {
        Self {
            employees: HashMap::new(),
            observer,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Iterate over all records in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &EmployeeRecord<Id>> + '_ {
        self.employees.values()
    }

    /// All records, order unspecified
    pub fn list_all(&self) -> Vec<&EmployeeRecord<Id>> {
        self.employees.values().collect()
    }
}

impl<Id, O> EmployeeStore<Id, O>
where
    Id: Eq + Hash + Clone + Display,
    O: StoreObserver,
{
    pub fn contains(&self, id: &Id) -> bool {
        self.employees.contains_key(id)
    }

    /// Get a record by id
    ///
    /// # Errors
    /// * `EmployeeNotFound` - If no record has this id
    pub fn get(&self, id: &Id) -> Result<&EmployeeRecord<Id>> {
        self.employees
            .get(id)
            .ok_or_else(|| RosterError::not_found(id))
    }

    /// Insert a record, replacing any record with the same id
    ///
    /// # Errors
    /// * `InvalidSalary` - If the salary is negative or not finite
    /// * `InvalidDepartment` - If the department is empty or blank
    pub fn add(&mut self, record: EmployeeRecord<Id>) -> Result<()> {
        let started = Instant::now();
        let employee_id = record.id.to_string();

        let result = validation::validate_record(&record);
        if result.is_ok() {
            self.employees.insert(record.id.clone(), record);
        }

        self.report(OP_ADD, Some(employee_id), None, None, started, &result);
        result
    }

    /// Remove a record and hand it back
    ///
    /// # Errors
    /// * `EmployeeNotFound` - If no record has this id
    pub fn remove(&mut self, id: &Id) -> Result<EmployeeRecord<Id>> {
        let started = Instant::now();
        let result = self
            .employees
            .remove(id)
            .ok_or_else(|| RosterError::not_found(id));

        self.report(OP_REMOVE, Some(id.to_string()), None, None, started, &result);
        result
    }

    /// Remove a record, discarding it
    ///
    /// # Errors
    /// * `EmployeeNotFound` - If no record has this id
    pub fn delete(&mut self, id: &Id) -> Result<()> {
        let started = Instant::now();
        let result = match self.employees.remove(id) {
            Some(_) => Ok(()),
            None => Err(RosterError::not_found(id)),
        };

        self.report(OP_DELETE, Some(id.to_string()), None, None, started, &result);
        result
    }

    /// Apply a typed single-field update
    ///
    /// The new value is validated before it is written; on error the record
    /// is untouched.
    ///
    /// # Errors
    /// * `EmployeeNotFound` - If no record has this id
    /// * `InvalidSalary` - If a salary update is negative or not finite
    /// * `InvalidDepartment` - If a department update is blank
    pub fn update(&mut self, id: &Id, update: FieldUpdate) -> Result<()> {
        let started = Instant::now();
        let field = update.field().name();
        let result = self.write_update(id, update);

        self.report(
            OP_UPDATE,
            Some(id.to_string()),
            Some(field),
            None,
            started,
            &result,
        );
        result
    }

    /// Apply an update given as a field name plus an untyped value
    ///
    /// Existence is checked first, then the name and value are resolved
    /// with [`FieldUpdate::from_dynamic`], then the update proceeds as
    /// [`update`](Self::update).
    ///
    /// Returns the field the name resolved to.
    ///
    /// # Errors
    /// * `EmployeeNotFound` - If no record has this id
    /// * `UnknownField` - If `field` names no updatable field
    /// * `TypeMismatch` - If `value` does not fit the field
    /// * `InvalidSalary` / `InvalidDepartment` - As for `update`
    pub fn update_field(
        &mut self,
        id: &Id,
        field: &str,
        value: FieldValue,
    ) -> Result<UpdatableField> {
        let started = Instant::now();

        let resolved = if self.employees.contains_key(id) {
            FieldUpdate::from_dynamic(field, value)
        } else {
            Err(RosterError::not_found(id))
        };

        let update = match resolved {
            Ok(update) => update,
            Err(err) => {
                let result: Result<UpdatableField> = Err(err);
                self.report(OP_UPDATE, Some(id.to_string()), None, None, started, &result);
                return result;
            }
        };

        let target = update.field();
        let result = self.write_update(id, update);
        self.report(
            OP_UPDATE,
            Some(id.to_string()),
            Some(target.name()),
            None,
            started,
            &result,
        );
        result.map(|()| target)
    }

    /// Raise the salary of every record rated at least `min_rating`
    ///
    /// Each qualifying salary becomes `salary * (1 + raise_percent / 100)`.
    /// Every new salary is computed and checked before any is written, so
    /// the raise applies to all qualifying records or to none.
    ///
    /// Returns the number of records raised.
    ///
    /// # Errors
    /// * `InvalidSalary` - If the raise would make any salary negative or
    ///   not finite
    pub fn give_raise_to_high_performers(
        &mut self,
        min_rating: f64,
        raise_percent: f64,
    ) -> Result<usize> {
        let started = Instant::now();
        let result = self.write_raise(min_rating, raise_percent);

        let affected = result.as_ref().ok().copied();
        self.report(OP_GIVE_RAISE, None, None, affected, started, &result);
        result
    }

    fn write_update(&mut self, id: &Id, update: FieldUpdate) -> Result<()> {
        let record = self
            .employees
            .get_mut(id)
            .ok_or_else(|| RosterError::not_found(id))?;
        update.validate()?;
        update.apply_to(record);
        Ok(())
    }

    fn write_raise(&mut self, min_rating: f64, raise_percent: f64) -> Result<usize> {
        let factor = validation::validate_raise_percent(raise_percent)?;

        let raised: Vec<(Id, f64)> = self
            .employees
            .values()
            .filter(|e| e.performance_rating >= min_rating)
            .map(|e| (e.id.clone(), e.salary * factor))
            .collect();

        for (_, salary) in &raised {
            validation::validate_salary(*salary)?;
        }

        for (id, salary) in &raised {
            if let Some(record) = self.employees.get_mut(id) {
                record.salary = *salary;
            }
        }

        Ok(raised.len())
    }

    fn report<T>(
        &self,
        op: &'static str,
        employee_id: Option<String>,
        field: Option<&'static str>,
        affected: Option<usize>,
        started: Instant,
        result: &Result<T>,
    ) {
        let outcome = match result {
            Ok(_) => EventOutcome::Success,
            Err(err) => EventOutcome::Failure(ExError::from(err).with_op(op)),
        };
        let event = StoreEvent {
            op,
            employee_id,
            field,
            affected,
            duration_ms: started.elapsed().as_millis() as u64,
            outcome,
        };
        self.observer.on_event(&event);
    }
}
