//! Working day classification and counting.
//!
//! This module walks a date range and classifies every day as working,
//! weekend, or holiday, producing the counts the balance calculations are
//! built on.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Holiday;

/// The result of classifying every day in an inclusive date range.
///
/// `total_days` always equals `working_days + weekend_days + holiday_days`.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::count_working_days;
/// use chrono::NaiveDate;
///
/// // Monday to Friday, no holidays
/// let start = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 3, 16).unwrap();
/// let result = count_working_days(start, end, &[]).unwrap();
///
/// assert_eq!(result.total_days, 7);
/// assert_eq!(result.working_days, 5);
/// assert_eq!(result.weekend_days, 2);
/// assert_eq!(result.holiday_days, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDayResult {
    /// Count of all days in the inclusive range.
    pub total_days: u32,
    /// Days that are neither weekend days nor holidays.
    pub working_days: u32,
    /// Saturdays and Sundays.
    pub weekend_days: u32,
    /// Holidays falling on a weekday.
    pub holiday_days: u32,
    /// The dates excluded from the working-day count, in range order.
    pub excluded_dates: Vec<NaiveDate>,
}

/// Counts the working days in an inclusive date range.
///
/// Every day in `[start, end]` is classified exactly once:
/// - Saturdays and Sundays count as weekend days. Weekend takes precedence
///   over holiday classification: a holiday falling on a weekend is reported
///   only as a weekend day, never double-subtracted.
/// - Remaining days whose date appears in `holidays` count as holiday days.
/// - Everything else is a working day.
///
/// The holiday list is expected to already be filtered to the relevant
/// region (see [`holidays_for_year`](super::holidays_for_year)).
///
/// # Arguments
///
/// * `start` - The first day of the range (inclusive)
/// * `end` - The last day of the range (inclusive)
/// * `holidays` - The holidays to exclude
///
/// # Returns
///
/// Returns a [`WorkingDayResult`], or [`EngineError::InvalidRange`] if
/// `start > end`. The range is never silently swapped.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::{count_working_days, holidays_for_year};
/// use vacation_engine::models::Region;
/// use chrono::NaiveDate;
///
/// let holidays = holidays_for_year(2025, Some(Region::Bavaria));
///
/// // The week around Labour Day 2025 (Thursday May 1)
/// let start = NaiveDate::from_ymd_opt(2025, 4, 28).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 5, 4).unwrap();
/// let result = count_working_days(start, end, &holidays).unwrap();
///
/// assert_eq!(result.working_days, 4);
/// assert_eq!(result.holiday_days, 1);
/// assert_eq!(result.weekend_days, 2);
/// ```
pub fn count_working_days(
    start: NaiveDate,
    end: NaiveDate,
    holidays: &[Holiday],
) -> EngineResult<WorkingDayResult> {
    if start > end {
        return Err(EngineError::InvalidRange { start, end });
    }

    let holiday_dates: HashSet<NaiveDate> = holidays.iter().map(|h| h.date).collect();

    let total_days = end.signed_duration_since(start).num_days() as u32 + 1;
    let mut working_days = 0;
    let mut weekend_days = 0;
    let mut holiday_days = 0;
    let mut excluded_dates = Vec::new();

    for day in start.iter_days() {
        if day > end {
            break;
        }
        if matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            weekend_days += 1;
            excluded_dates.push(day);
        } else if holiday_dates.contains(&day) {
            holiday_days += 1;
            excluded_dates.push(day);
        } else {
            working_days += 1;
        }
    }

    Ok(WorkingDayResult {
        total_days,
        working_days,
        weekend_days,
        holiday_days,
        excluded_dates,
    })
}
