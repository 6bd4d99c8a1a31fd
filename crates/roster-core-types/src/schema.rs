//! Canonical schema constants for structured logging
//!
//! Observers and log macros use these keys so captured events can be
//! asserted on by name.

pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity fields
pub const FIELD_EMPLOYEE_ID: &str = "employee_id";
pub const FIELD_UPDATED_FIELD: &str = "field";
pub const FIELD_AFFECTED: &str = "affected";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Store operation names
pub const OP_ADD: &str = "add";
pub const OP_REMOVE: &str = "remove";
pub const OP_DELETE: &str = "delete";
pub const OP_UPDATE: &str = "update";
pub const OP_GIVE_RAISE: &str = "give_raise";
