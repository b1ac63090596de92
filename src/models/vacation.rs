//! Vacation entry model.
//!
//! This module defines the [`VacationEntry`] struct, the sole source of
//! "used days" in balance calculations. Entries are created by an external
//! actor and never mutated by the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A booked vacation period for an employee.
///
/// The range is inclusive on both ends and `end_date >= start_date` is
/// guaranteed by the creating side.
///
/// # Example
///
/// ```
/// use vacation_engine::models::VacationEntry;
/// use chrono::NaiveDate;
///
/// let entry = VacationEntry {
///     id: "vac_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
///     note: Some("Skiurlaub".to_string()),
/// };
///
/// assert!(entry.contains_date(NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The employee this entry belongs to.
    pub employee_id: String,
    /// The first day of the vacation (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the vacation (inclusive).
    pub end_date: NaiveDate,
    /// Optional free-form note.
    #[serde(default)]
    pub note: Option<String>,
}

impl VacationEntry {
    /// Checks if a given date falls within this vacation period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Checks if this entry shares at least one calendar day with the given
    /// inclusive range.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::models::VacationEntry;
    /// use chrono::NaiveDate;
    ///
    /// let entry = VacationEntry {
    ///     id: "vac_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     start_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
    ///     note: None,
    /// };
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
    /// assert!(entry.overlaps_range(start, end));
    /// ```
    pub fn overlaps_range(&self, start: NaiveDate, end: NaiveDate) -> bool {
        crate::calculation::ranges_overlap(self.start_date, self.end_date, start, end)
    }
}
