use crate::errors::{Result, RosterError};
use crate::model::EmployeeRecord;

/// Validate a salary amount
///
/// # Errors
/// * `InvalidSalary` - If the amount is negative, NaN or infinite
pub fn validate_salary(salary: f64) -> Result<()> {
    if !salary.is_finite() || salary < 0.0 {
        return Err(RosterError::InvalidSalary { salary });
    }
    Ok(())
}

/// Validate a department name
///
/// # Errors
/// * `InvalidDepartment` - If the name is empty or whitespace-only
pub fn validate_department(department: &str) -> Result<()> {
    if department.trim().is_empty() {
        return Err(RosterError::InvalidDepartment {
            department: department.to_string(),
        });
    }
    Ok(())
}

/// Validate a record submitted to the store
///
/// Salary is checked before department, so a record failing both reports
/// `InvalidSalary`.
///
/// # Errors
/// * `InvalidSalary` - See [`validate_salary`]
/// * `InvalidDepartment` - See [`validate_department`]
pub fn validate_record<Id>(record: &EmployeeRecord<Id>) -> Result<()> {
    validate_salary(record.salary)?;
    validate_department(&record.department)
}

/// Validate a raise multiplier before any salary is touched
///
/// A raise below -100% would negate every salary it touches, so the whole
/// operation is rejected up front.
///
/// # Errors
/// * `InvalidSalary` - If the resulting multiplier is negative or not finite
pub fn validate_raise_percent(raise_percent: f64) -> Result<f64> {
    let factor = 1.0 + raise_percent / 100.0;
    if !factor.is_finite() || factor < 0.0 {
        return Err(RosterError::InvalidSalary { salary: factor });
    }
    Ok(factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_bounds() {
        assert!(validate_salary(0.0).is_ok());
        assert!(validate_salary(50_000.0).is_ok());
        assert!(matches!(
            validate_salary(-0.01),
            Err(RosterError::InvalidSalary { .. })
        ));
        assert!(validate_salary(f64::NAN).is_err());
        assert!(validate_salary(f64::INFINITY).is_err());
    }

    #[test]
    fn test_department_blank() {
        assert!(validate_department("IT").is_ok());
        assert!(matches!(
            validate_department(""),
            Err(RosterError::InvalidDepartment { .. })
        ));
        assert!(validate_department("   \t").is_err());
    }

    #[test]
    fn test_salary_checked_before_department() {
        let record = EmployeeRecord::new(1_u32, "Jake Doe", "", -1.0, 3.0, 2, true);
        assert!(matches!(
            validate_record(&record),
            Err(RosterError::InvalidSalary { .. })
        ));
    }

    #[test]
    fn test_raise_percent_factor() {
        assert_eq!(validate_raise_percent(10.0).unwrap(), 1.1);
        assert_eq!(validate_raise_percent(-100.0).unwrap(), 0.0);
        assert!(validate_raise_percent(-150.0).is_err());
    }
}
