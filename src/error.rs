//! Error types for the vacation calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during holiday and balance
//! calculations.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the vacation calculation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use vacation_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidRange {
///     start: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date range: start 2025-03-14 is after end 2025-03-10"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date range had its start after its end.
    ///
    /// Ranges are never silently swapped or truncated; the caller must fix
    /// the input.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// The start date that was passed.
        start: NaiveDate,
        /// The end date that was passed.
        end: NaiveDate,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_invalid_range_displays_both_dates() {
        let error = EngineError::InvalidRange {
            start: date("2025-03-14"),
            end: date("2025-03-10"),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: start 2025-03-14 is after end 2025-03-10"
        );
    }

    #[test]
    fn test_invalid_employee_displays_field_and_message() {
        let error = EngineError::InvalidEmployee {
            field: "allowance_days".to_string(),
            message: "cannot be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'allowance_days': cannot be negative"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "day count exceeded range bounds".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Calculation error: day count exceeded range bounds"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_range() -> EngineResult<()> {
            Err(EngineError::InvalidRange {
                start: date("2025-01-02"),
                end: date("2025-01-01"),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_range()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
