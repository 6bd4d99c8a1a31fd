pub mod store;
pub mod update;

pub use store::EmployeeStore;
pub use update::{FieldUpdate, FieldValue, UpdatableField, ValueKind};
