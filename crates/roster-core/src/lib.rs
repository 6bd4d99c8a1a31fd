//! Roster Core - in-memory employee record store
//!
//! This crate provides the data model and operations for an employee roster,
//! including:
//! - `EmployeeRecord` keyed by a caller-chosen id type
//! - Validated CRUD with typed and dynamic single-field updates
//! - Searches, filters, sorts and department salary averages
//! - An all-or-nothing performance raise
//! - A command boundary (`apply`) and an observer seam for logging

pub mod apply;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod observer;
pub mod ops;
pub mod queries;
pub mod rules;

pub use roster_core_types as core_types;

// Re-export commonly used types
pub use apply::apply;
pub use commands::{Applied, Command};
pub use errors::{ExError, ExErrorKind, Result, RosterError};
pub use model::EmployeeRecord;
pub use observer::{
    EventOutcome, NoopObserver, RecordingObserver, StoreEvent, StoreObserver, TracingObserver,
};
pub use ops::{EmployeeStore, FieldUpdate, FieldValue, UpdatableField, ValueKind};
pub use queries::{DEFAULT_RAISE_MIN_RATING, DEFAULT_RAISE_PERCENT, DEFAULT_TOP_PAID};
