//! Vacation balance calculation.
//!
//! This module aggregates used working days per employee and year from
//! vacation entries and derives the remaining allowance.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Employee, Holiday, VacationBalance, VacationEntry};

use super::working_days::count_working_days;

fn year_bounds(year: i32) -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(year, 1, 1).expect("valid January 1"),
        NaiveDate::from_ymd_opt(year, 12, 31).expect("valid December 31"),
    )
}

/// Sums the working days an employee has used within one calendar year.
///
/// Entries overlapping the year are clipped to the year boundaries before
/// counting, so a vacation spanning New Year contributes only its days
/// inside the queried year. The summation trusts its input: entries are
/// assumed not to overlap each other (request validation enforces that at
/// creation time).
///
/// # Arguments
///
/// * `employee_id` - The employee whose entries are summed
/// * `year` - The calendar year
/// * `entries` - All vacation entries (other employees' entries are ignored)
/// * `holidays` - The holiday set for the employee's region
///
/// # Returns
///
/// The number of used working days, or [`EngineError::InvalidRange`]
/// (propagated from the counter) if an entry carries an inverted range.
///
/// [`EngineError::InvalidRange`]: crate::error::EngineError::InvalidRange
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::{holidays_for_year, used_days_in_year};
/// use vacation_engine::models::{Region, VacationEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let holidays = holidays_for_year(2025, Some(Region::Berlin));
/// let entries = vec![VacationEntry {
///     id: "vac_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
///     note: None,
/// }];
///
/// let used = used_days_in_year("emp_001", 2025, &entries, &holidays).unwrap();
/// assert_eq!(used, Decimal::new(5, 0));
/// ```
pub fn used_days_in_year(
    employee_id: &str,
    year: i32,
    entries: &[VacationEntry],
    holidays: &[Holiday],
) -> EngineResult<Decimal> {
    let (year_start, year_end) = year_bounds(year);

    let mut used = Decimal::ZERO;
    for entry in entries
        .iter()
        .filter(|e| e.employee_id == employee_id && e.overlaps_range(year_start, year_end))
    {
        let effective_start = entry.start_date.max(year_start);
        let effective_end = entry.end_date.min(year_end);
        let counted = count_working_days(effective_start, effective_end, holidays)?;
        used += Decimal::from(counted.working_days);
    }

    Ok(used)
}

/// Derives an employee's vacation balance for one calendar year.
///
/// `remaining_days = allowance_days - used_days`, signed: over-allocation
/// yields a negative remainder and is preserved, not clamped (see
/// [`VacationBalance::clamped_remaining`] for display-side flooring).
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::{balance_for_employee, holidays_for_year};
/// use vacation_engine::models::{Employee, Region, VacationEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Anna Schmidt".to_string(),
///     allowance_days: Decimal::new(30, 0),
///     region: Region::Berlin,
/// };
/// let holidays = holidays_for_year(2025, Some(employee.region));
/// let entries = vec![VacationEntry {
///     id: "vac_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
///     note: None,
/// }];
///
/// let balance = balance_for_employee(&employee, 2025, &entries, &holidays).unwrap();
/// assert_eq!(balance.used_days, Decimal::new(5, 0));
/// assert_eq!(balance.remaining_days, Decimal::new(25, 0));
/// ```
pub fn balance_for_employee(
    employee: &Employee,
    year: i32,
    entries: &[VacationEntry],
    holidays: &[Holiday],
) -> EngineResult<VacationBalance> {
    let used_days = used_days_in_year(&employee.id, year, entries, holidays)?;

    Ok(VacationBalance {
        employee_id: employee.id.clone(),
        year,
        allowance_days: employee.allowance_days,
        used_days,
        remaining_days: employee.allowance_days - used_days,
    })
}
