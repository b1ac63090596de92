//! Vacation request validation.
//!
//! This module checks a requested vacation period against an employee's
//! existing entries and allowance. Overlap with an existing entry is the
//! only hard-blocking condition; exceeding the allowance is reported as a
//! warning so the caller can decide to block or confirm-and-proceed.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::EngineResult;
use crate::models::{Employee, Holiday, VacationEntry};

use super::balance::used_days_in_year;
use super::overlap::ranges_overlap;
use super::working_days::count_working_days;

/// A blocking validation error for a vacation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ValidationError {
    /// The requested period shares at least one day with an existing entry.
    #[error("overlaps with existing vacation from {start} to {end}")]
    OverlapsExisting {
        /// The id of the conflicting entry.
        entry_id: String,
        /// The first day of the conflicting entry.
        start: NaiveDate,
        /// The last day of the conflicting entry.
        end: NaiveDate,
    },
}

/// The result of validating a vacation request.
///
/// `is_valid` is false exactly when `errors` is non-empty.
/// `would_exceed_allowance` is informational and never blocks on its own.
/// `remaining_after` is signed; callers clamp for display if needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestValidation {
    /// Whether the request may be created as-is.
    pub is_valid: bool,
    /// The blocking errors found, if any.
    pub errors: Vec<ValidationError>,
    /// Working days the requested period would consume.
    pub working_days: u32,
    /// Whether granting the request would push usage past the allowance.
    pub would_exceed_allowance: bool,
    /// Working days already used in the queried year.
    pub current_used: Decimal,
    /// The employee's annual allowance.
    pub allowance: Decimal,
    /// `allowance - (current_used + working_days)`, signed.
    pub remaining_after: Decimal,
}

/// Validates a vacation request against existing entries and the allowance.
///
/// The checks, in order:
/// 1. Count the working days of `[start, end]`; an inverted range fails
///    with [`EngineError::InvalidRange`].
/// 2. Test the period against every existing entry of the same employee;
///    each overlap appends a blocking [`ValidationError::OverlapsExisting`].
///    When editing an entry, pass its id as `exclude_entry_id` so the entry
///    does not conflict with itself.
/// 3. Derive the allowance outlook: `would_exceed_allowance` and the signed
///    `remaining_after`.
///
/// [`EngineError::InvalidRange`]: crate::error::EngineError::InvalidRange
///
/// # Arguments
///
/// * `employee` - The employee requesting vacation
/// * `start` - The first requested day (inclusive)
/// * `end` - The last requested day (inclusive)
/// * `existing_entries` - All known entries (other employees' are ignored)
/// * `holidays` - The holiday set for the employee's region
/// * `year` - The calendar year the allowance is checked against
/// * `exclude_entry_id` - Entry id to skip in the overlap check (editing)
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::{holidays_for_year, validate_vacation_request};
/// use vacation_engine::models::{Employee, Region, VacationEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Anna Schmidt".to_string(),
///     allowance_days: Decimal::new(30, 0),
///     region: Region::Hamburg,
/// };
/// let holidays = holidays_for_year(2025, Some(employee.region));
///
/// let start = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// let result =
///     validate_vacation_request(&employee, start, end, &[], &holidays, 2025, None).unwrap();
///
/// assert!(result.is_valid);
/// assert_eq!(result.working_days, 5);
/// assert_eq!(result.remaining_after, Decimal::new(25, 0));
/// ```
pub fn validate_vacation_request(
    employee: &Employee,
    start: NaiveDate,
    end: NaiveDate,
    existing_entries: &[VacationEntry],
    holidays: &[Holiday],
    year: i32,
    exclude_entry_id: Option<&str>,
) -> EngineResult<RequestValidation> {
    let counted = count_working_days(start, end, holidays)?;
    let working_days = counted.working_days;

    let mut errors = Vec::new();
    for entry in existing_entries
        .iter()
        .filter(|e| e.employee_id == employee.id)
    {
        if exclude_entry_id == Some(entry.id.as_str()) {
            continue;
        }
        if ranges_overlap(start, end, entry.start_date, entry.end_date) {
            warn!(
                employee_id = %employee.id,
                entry_id = %entry.id,
                "vacation request overlaps existing entry"
            );
            errors.push(ValidationError::OverlapsExisting {
                entry_id: entry.id.clone(),
                start: entry.start_date,
                end: entry.end_date,
            });
        }
    }

    let current_used = used_days_in_year(&employee.id, year, existing_entries, holidays)?;
    let requested = Decimal::from(working_days);
    let would_exceed_allowance = current_used + requested > employee.allowance_days;
    let remaining_after = employee.allowance_days - (current_used + requested);

    let is_valid = errors.is_empty();
    debug!(
        employee_id = %employee.id,
        working_days,
        is_valid,
        would_exceed_allowance,
        "validated vacation request"
    );

    Ok(RequestValidation {
        is_valid,
        errors,
        working_days,
        would_exceed_allowance,
        current_used,
        allowance: employee.allowance_days,
        remaining_after,
    })
}
