//! Observer seam between the store and its logging collaborator
//!
//! The store reports every mutation outcome to an injected `StoreObserver`.
//! Nothing the observer does can change the outcome of a store operation.

use std::sync::{Arc, Mutex};

use crate::errors::ExError;
use crate::{log_op_end, log_op_error};

/// Outcome of one store mutation
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Success,
    Failure(ExError),
}

/// Structured record of one store mutation
#[derive(Debug, Clone, PartialEq)]
pub struct StoreEvent {
    /// Operation name, one of the `OP_*` schema constants
    pub op: &'static str,
    /// Display form of the affected employee id, if the op targets one
    pub employee_id: Option<String>,
    /// Updated field name, for `update`
    pub field: Option<&'static str>,
    /// Number of records touched, for bulk operations
    pub affected: Option<usize>,
    pub duration_ms: u64,
    pub outcome: EventOutcome,
}

impl StoreEvent {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, EventOutcome::Success)
    }

    pub fn error(&self) -> Option<&ExError> {
        match &self.outcome {
            EventOutcome::Failure(err) => Some(err),
            EventOutcome::Success => None,
        }
    }
}

/// Receiver of store events
///
/// Injected into `EmployeeStore` so the store stays testable without a
/// global logger.
pub trait StoreObserver {
    fn on_event(&self, event: &StoreEvent);
}

/// Default observer: forwards events to `tracing`
///
/// Successes log at info level through `log_op_end!`, failures at error
/// level through `log_op_error!`. Optional fields are only recorded when
/// the event carries them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl StoreObserver for TracingObserver {
    fn on_event(&self, event: &StoreEvent) {
        let employee_id = event.employee_id.as_deref();
        let affected = event.affected.map(|n| n as u64);
        match &event.outcome {
            EventOutcome::Success => {
                log_op_end!(
                    event.op,
                    duration_ms = event.duration_ms,
                    employee_id = employee_id,
                    field = event.field,
                    affected = affected
                );
            }
            EventOutcome::Failure(err) => {
                log_op_error!(
                    event.op,
                    err.clone(),
                    duration_ms = event.duration_ms,
                    employee_id = employee_id,
                    field = event.field
                );
            }
        }
    }
}

/// Observer that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StoreObserver for NoopObserver {
    fn on_event(&self, _event: &StoreEvent) {}
}

/// Observer that keeps events in memory
///
/// Clones share the same buffer, so a test keeps one handle and gives the
/// other to the store.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<StoreEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<StoreEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events for one operation name
    pub fn events_for(&self, op: &str) -> Vec<StoreEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.op == op)
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().map(|mut e| e.clear()).ok();
    }
}

impl StoreObserver for RecordingObserver {
    fn on_event(&self, event: &StoreEvent) {
        self.events
            .lock()
            .map(|mut events| events.push(event.clone()))
            .ok();
    }
}

impl<O: StoreObserver + ?Sized> StoreObserver for &O {
    fn on_event(&self, event: &StoreEvent) {
        (**self).on_event(event)
    }
}

impl<O: StoreObserver + ?Sized> StoreObserver for Box<O> {
    fn on_event(&self, event: &StoreEvent) {
        (**self).on_event(event)
    }
}
