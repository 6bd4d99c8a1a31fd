//! Redaction wrapper for values that must not reach log output
//!
//! Salaries are personal data; log macros receive them wrapped in
//! `Sensitive` so a `%salary` or `?salary` field prints a placeholder.

use std::fmt;

pub const REDACTED: &str = "***REDACTED***";

/// Wrapper that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use roster_core_types::Sensitive;
///
/// let salary = Sensitive::new(75_000.0_f64);
/// assert_eq!(format!("{}", salary), "***REDACTED***");
/// assert_eq!(*salary.expose(), 75_000.0);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the wrapped value
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_display_are_redacted() {
        let salary = Sensitive::new(82_000.0_f64);
        assert_eq!(format!("{:?}", salary), REDACTED);
        assert_eq!(format!("{}", salary), REDACTED);
        assert!(!format!("{:?}", salary).contains("82000"));
    }

    #[test]
    fn test_expose_and_into_inner() {
        let salary = Sensitive::from(65_000.0_f64);
        assert_eq!(*salary.expose(), 65_000.0);
        assert_eq!(salary.into_inner(), 65_000.0);
    }

    #[test]
    fn test_redacted_inside_derived_debug() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct Payroll {
            name: String,
            salary: Sensitive<f64>,
        }

        let row = Payroll {
            name: "Alice Smith".to_string(),
            salary: Sensitive::new(75_000.0),
        };

        let debug_str = format!("{:?}", row);
        assert!(debug_str.contains("Alice Smith"));
        assert!(debug_str.contains(REDACTED));
        assert!(!debug_str.contains("75000"));
    }
}
