#![allow(clippy::unwrap_used, clippy::expect_used)]

use roster_core::errors::{ExError, ExErrorKind, RosterError};
use roster_core::core_types::RequestContext;

#[test]
fn test_not_found_verifiable_by_kind() {
    let err = RosterError::EmployeeNotFound {
        employee_id: "EMP404".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.entity_id(), Some("EMP404"));
}

#[test]
fn test_invalid_salary_structured_fields() {
    let err = RosterError::InvalidSalary { salary: -10.0 };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidSalary);
    assert_eq!(ex_err.code(), "ERR_INVALID_SALARY");
    assert_eq!(ex_err.field(), Some("salary"));
    assert!(ex_err.message().contains("-10"));
}

#[test]
fn test_invalid_department_distinct_from_salary() {
    let ex_err: ExError = RosterError::InvalidDepartment {
        department: " ".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidDepartment);
    assert_ne!(ex_err.kind(), ExErrorKind::InvalidSalary);
    assert_eq!(ex_err.field(), Some("department"));
}

#[test]
fn test_unknown_field_and_type_mismatch_carry_field() {
    let unknown: ExError = RosterError::UnknownField {
        field: "email".to_string(),
    }
    .into();
    let mismatch: ExError = RosterError::TypeMismatch {
        field: "active".to_string(),
        expected: "boolean",
        found: "text",
    }
    .into();

    assert_eq!(unknown.code(), "ERR_UNKNOWN_FIELD");
    assert_eq!(unknown.field(), Some("email"));
    assert_eq!(mismatch.code(), "ERR_TYPE_MISMATCH");
    assert_eq!(mismatch.field(), Some("active"));
    assert!(mismatch.message().contains("expected boolean"));
}

#[test]
fn test_every_store_error_is_a_distinct_kind() {
    let errors = [
        RosterError::InvalidSalary { salary: -1.0 },
        RosterError::InvalidDepartment {
            department: String::new(),
        },
        RosterError::not_found(1),
        RosterError::UnknownField {
            field: "x".to_string(),
        },
        RosterError::TypeMismatch {
            field: "x".to_string(),
            expected: "text",
            found: "boolean",
        },
    ];

    let mut codes: Vec<&str> = errors.iter().map(|e| e.kind().code()).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), errors.len());
}

#[test]
fn test_invalid_input_is_separate_from_store_errors() {
    let ctx = RequestContext::new();
    let err = ExError::invalid_input("could not parse 'abc' as a number").with_context(&ctx);

    assert_eq!(err.code(), "ERR_INVALID_INPUT");
    assert!(!err.kind().is_validation());
    assert_eq!(err.request_id(), Some(&ctx.request_id));
}

#[test]
fn test_store_error_from_operation_carries_op() {
    let mut store = roster_core::EmployeeStore::with_observer(roster_core::NoopObserver);
    store
        .add(roster_core::EmployeeRecord::new(1_u32, "A", "IT", 1.0, 1.0, 1, true))
        .unwrap();

    let err = store.delete(&2).unwrap_err();
    let ex_err = ExError::from(&err).with_op("delete");

    assert_eq!(ex_err.op(), Some("delete"));
    assert!(ex_err.to_string().starts_with("[ERR_NOT_FOUND] in operation 'delete'"));
}
