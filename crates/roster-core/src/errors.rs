use roster_core_types::{RequestContext, RequestId, TraceId};
use thiserror::Error;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on or show
/// to a user without depending on the message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExErrorKind {
    // Validation
    InvalidSalary,
    InvalidDepartment,
    UnknownField,
    TypeMismatch,

    // Lookup
    NotFound,

    /// Caller input that could not be parsed at all (never raised by the store)
    InvalidInput,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidSalary => "ERR_INVALID_SALARY",
            ExErrorKind::InvalidDepartment => "ERR_INVALID_DEPARTMENT",
            ExErrorKind::UnknownField => "ERR_UNKNOWN_FIELD",
            ExErrorKind::TypeMismatch => "ERR_TYPE_MISMATCH",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
        }
    }

    /// True for kinds produced by store validation rather than lookup or parsing
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidSalary
                | ExErrorKind::InvalidDepartment
                | ExErrorKind::UnknownField
                | ExErrorKind::TypeMismatch
        )
    }
}

/// Canonical structured error type
///
/// Carries the classification plus whatever context the failing operation
/// knew about: the store op, the employee id, the field being updated and
/// the caller's correlation ids.
#[derive(Debug, Clone, PartialEq)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    field: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            field: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    /// Shorthand for the presentation layer's "invalid input" notice
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ExErrorKind::InvalidInput).with_message(message)
    }

    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Attach both correlation ids from a caller context
    pub fn with_context(mut self, ctx: &RequestContext) -> Self {
        self.request_id = Some(ctx.request_id.clone());
        self.trace_id = ctx.trace_id.clone();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (employee_id: {})", entity_id)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for roster store operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    /// Submitted or updated salary is negative or not a finite number
    #[error("Invalid salary {salary}: salary must be a non-negative amount")]
    InvalidSalary { salary: f64 },

    /// Submitted or updated department is empty or blank
    #[error("Invalid department {department:?}: department cannot be empty")]
    InvalidDepartment { department: String },

    /// No record with this id exists in the store
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound { employee_id: String },

    /// Dynamic update named a field outside the updatable set
    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    /// Dynamic update value has the wrong type for its field
    #[error("Type mismatch for field {field}: expected {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl RosterError {
    pub fn not_found(employee_id: impl std::fmt::Display) -> Self {
        RosterError::EmployeeNotFound {
            employee_id: employee_id.to_string(),
        }
    }

    pub fn kind(&self) -> ExErrorKind {
        match self {
            RosterError::InvalidSalary { .. } => ExErrorKind::InvalidSalary,
            RosterError::InvalidDepartment { .. } => ExErrorKind::InvalidDepartment,
            RosterError::EmployeeNotFound { .. } => ExErrorKind::NotFound,
            RosterError::UnknownField { .. } => ExErrorKind::UnknownField,
            RosterError::TypeMismatch { .. } => ExErrorKind::TypeMismatch,
        }
    }
}

/// Conversion from RosterError to the structured facility
impl From<RosterError> for ExError {
    fn from(err: RosterError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        let ex = ExError::new(kind).with_message(message);
        match err {
            RosterError::EmployeeNotFound { employee_id } => ex.with_entity_id(employee_id),
            RosterError::InvalidSalary { .. } => ex.with_field("salary"),
            RosterError::InvalidDepartment { .. } => ex.with_field("department"),
            RosterError::UnknownField { field } | RosterError::TypeMismatch { field, .. } => {
                ex.with_field(field)
            }
        }
    }
}

impl From<&RosterError> for ExError {
    fn from(err: &RosterError) -> Self {
        err.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::InvalidSalary, "ERR_INVALID_SALARY"),
            (ExErrorKind::InvalidDepartment, "ERR_INVALID_DEPARTMENT"),
            (ExErrorKind::UnknownField, "ERR_UNKNOWN_FIELD"),
            (ExErrorKind::TypeMismatch, "ERR_TYPE_MISMATCH"),
            (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
            (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_invalid_input_is_not_a_validation_kind() {
        assert!(!ExErrorKind::InvalidInput.is_validation());
        assert!(!ExErrorKind::NotFound.is_validation());
        assert!(ExErrorKind::InvalidSalary.is_validation());
    }

    #[test]
    fn test_display_includes_code_and_context() {
        let err = ExError::new(ExErrorKind::NotFound)
            .with_op("get")
            .with_entity_id("EMP001")
            .with_message("Employee not found");
        let text = err.to_string();
        assert!(text.starts_with("[ERR_NOT_FOUND]"));
        assert!(text.contains("'get'"));
        assert!(text.contains("EMP001"));
    }

    #[test]
    fn test_with_context_copies_correlation_ids() {
        let ctx = RequestContext::new().with_trace_id(TraceId::new());
        let err = ExError::invalid_input("bad number").with_context(&ctx);
        assert_eq!(err.request_id(), Some(&ctx.request_id));
        assert_eq!(err.trace_id(), ctx.trace_id.as_ref());
    }
}
