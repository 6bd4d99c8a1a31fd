//! Update Tests
//!
//! Typed `FieldUpdate` and dynamic field-name updates.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{alice, seeded_store, seeded_string_store};
use roster_core::{FieldUpdate, FieldValue, RosterError, UpdatableField};

#[test]
fn test_typed_update_each_field_in_sequence() {
    // GIVEN Alice is stored
    let mut store = seeded_store();

    // WHEN each mutable field is updated in turn
    store
        .update(&101, FieldUpdate::Name("Alice Cooper".to_string()))
        .unwrap();
    store
        .update(&101, FieldUpdate::Department("Finance".to_string()))
        .unwrap();
    store.update(&101, FieldUpdate::Salary(90_000.0)).unwrap();
    store
        .update(&101, FieldUpdate::PerformanceRating(3.5))
        .unwrap();
    store
        .update(&101, FieldUpdate::YearsOfExperience(9))
        .unwrap();
    store.update(&101, FieldUpdate::Active(false)).unwrap();

    // THEN get reflects every update
    let record = store.get(&101).unwrap();
    assert_eq!(record.id, 101);
    assert_eq!(record.name, "Alice Cooper");
    assert_eq!(record.department, "Finance");
    assert_eq!(record.salary, 90_000.0);
    assert_eq!(record.performance_rating, 3.5);
    assert_eq!(record.years_of_experience, 9);
    assert!(!record.active);
}

#[test]
fn test_dynamic_update_each_field_in_sequence() {
    let mut store = seeded_string_store();
    let id = "EMP001".to_string();

    store.update_field(&id, "name", "Johnny Doe".into()).unwrap();
    store
        .update_field(&id, "department", "Research".into())
        .unwrap();
    store.update_field(&id, "salary", 52_500.5.into()).unwrap();
    store
        .update_field(&id, "performanceRating", 4.9.into())
        .unwrap();
    store
        .update_field(&id, "yearsOfExperience", 6_i64.into())
        .unwrap();
    store.update_field(&id, "active", false.into()).unwrap();

    let record = store.get(&id).unwrap();
    assert_eq!(record.name, "Johnny Doe");
    assert_eq!(record.department, "Research");
    assert_eq!(record.salary, 52_500.5);
    assert_eq!(record.performance_rating, 4.9);
    assert_eq!(record.years_of_experience, 6);
    assert!(!record.active);
}

#[test]
fn test_negative_salary_update_is_rejected() {
    // GIVEN Alice earns 75000
    let mut store = seeded_store();

    // WHEN her salary is set negative
    let result = store.update(&101, FieldUpdate::Salary(-1.0));

    // THEN the update fails and the salary is unchanged
    assert!(matches!(result, Err(RosterError::InvalidSalary { .. })));
    assert_eq!(store.get(&101).unwrap().salary, 75_000.0);
}

#[test]
fn test_dynamic_negative_salary_is_rejected() {
    let mut store = seeded_string_store();
    let id = "EMP001".to_string();

    let result = store.update_field(&id, "salary", FieldValue::Integer(-5));

    assert!(matches!(result, Err(RosterError::InvalidSalary { .. })));
    assert_eq!(store.get(&id).unwrap().salary, 50_000.0);
}

#[test]
fn test_non_finite_salary_is_rejected() {
    let mut store = seeded_store();

    for salary in [f64::NAN, f64::INFINITY] {
        let result = store.update(&101, FieldUpdate::Salary(salary));
        assert!(matches!(result, Err(RosterError::InvalidSalary { .. })));
    }
    assert_eq!(store.get(&101).unwrap(), &alice());
}

#[test]
fn test_blank_department_update_is_rejected() {
    let mut store = seeded_store();

    let result = store.update_field(&101, "department", "  ".into());

    assert!(matches!(result, Err(RosterError::InvalidDepartment { .. })));
    assert_eq!(store.get(&101).unwrap().department, "IT");
}

#[test]
fn test_unknown_field() {
    let mut store = seeded_store();

    let result = store.update_field(&101, "email", "a@b.c".into());

    assert!(matches!(result, Err(RosterError::UnknownField { ref field }) if field == "email"));
    assert_eq!(store.get(&101).unwrap(), &alice());
}

#[test]
fn test_id_is_not_updatable() {
    let mut store = seeded_store();

    let result = store.update_field(&101, "id", FieldValue::Integer(5));

    assert!(matches!(result, Err(RosterError::UnknownField { .. })));
}

#[test]
fn test_type_mismatches() {
    let mut store = seeded_store();
    let cases: [(&str, FieldValue); 5] = [
        ("salary", "lots".into()),
        ("name", FieldValue::Integer(3)),
        ("active", FieldValue::Integer(1)),
        ("yearsOfExperience", FieldValue::Number(2.5)),
        ("yearsOfExperience", FieldValue::Integer(-2)),
    ];

    for (field, value) in cases {
        let result = store.update_field(&101, field, value.clone());
        assert!(
            matches!(result, Err(RosterError::TypeMismatch { .. })),
            "expected TypeMismatch for {} = {:?}, got {:?}",
            field,
            value,
            result
        );
    }
    assert_eq!(store.get(&101).unwrap(), &alice());
}

#[test]
fn test_missing_id_wins_over_bad_field() {
    let mut store = seeded_store();

    let result = store.update_field(&999, "email", "x".into());

    assert!(matches!(result, Err(RosterError::EmployeeNotFound { .. })));
}

#[test]
fn test_field_name_spellings() {
    let mut store = seeded_store();

    let rating = store
        .update_field(&101, "performance_rating", 4.0.into())
        .unwrap();
    let active = store.update_field(&101, "isActive", false.into()).unwrap();

    // Every spelling resolves to its canonical field
    assert_eq!(rating, UpdatableField::PerformanceRating);
    assert_eq!(active, UpdatableField::Active);

    let record = store.get(&101).unwrap();
    assert_eq!(record.performance_rating, 4.0);
    assert!(!record.active);
}

#[test]
fn test_name_is_not_validated() {
    let mut store = seeded_store();

    store.update(&101, FieldUpdate::Name(String::new())).unwrap();

    assert_eq!(store.get(&101).unwrap().name, "");
}

#[test]
fn test_field_update_reports_its_field() {
    assert_eq!(
        FieldUpdate::YearsOfExperience(1).field(),
        UpdatableField::YearsOfExperience
    );
    assert_eq!(UpdatableField::YearsOfExperience.to_string(), "yearsOfExperience");
}

#[test]
fn test_field_value_deserializes_untagged() {
    let values: Vec<FieldValue> = serde_json::from_str(r#"[true, 3, 2.5, "IT"]"#).unwrap();

    assert_eq!(
        values,
        vec![
            FieldValue::Bool(true),
            FieldValue::Integer(3),
            FieldValue::Number(2.5),
            FieldValue::Text("IT".to_string()),
        ]
    );
}
