//! Multi-year aggregation.
//!
//! This module merges per-year holiday catalogs and balance calculations
//! across a span of years for overview views.

use tracing::debug;

use crate::error::EngineResult;
use crate::models::{Employee, Holiday, Region, VacationBalance, VacationEntry};

use super::balance::balance_for_employee;
use super::holiday_catalog::holidays_for_year;

/// Generates the holidays of every year in `[start_year, end_year]`.
///
/// The concatenated catalogs are sorted ascending by date with the same
/// stable tie-break as the single-year catalog; no deduplication is needed
/// since dates are year-distinct. An inverted span yields an empty list.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::{holidays_for_year, holidays_for_years};
///
/// let span = holidays_for_years(2024, 2025, None);
/// assert_eq!(span.len(), 34);
/// assert_eq!(holidays_for_years(2025, 2025, None), holidays_for_year(2025, None));
/// ```
pub fn holidays_for_years(
    start_year: i32,
    end_year: i32,
    region: Option<Region>,
) -> Vec<Holiday> {
    let mut holidays = Vec::new();
    for year in start_year..=end_year {
        holidays.extend(holidays_for_year(year, region));
    }
    holidays.sort_by_key(|h| h.date);

    debug!(
        start_year,
        end_year,
        count = holidays.len(),
        "aggregated holidays across year span"
    );
    holidays
}

/// Derives an employee's vacation balance for every year in
/// `[start_year, end_year]`, ascending.
///
/// Holidays are resolved per year for the employee's region. An inverted
/// span yields an empty list.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::balances_for_years;
/// use vacation_engine::models::{Employee, Region};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Anna Schmidt".to_string(),
///     allowance_days: Decimal::new(30, 0),
///     region: Region::Hesse,
/// };
///
/// let balances = balances_for_years(&employee, 2024, 2026, &[]).unwrap();
/// assert_eq!(balances.len(), 3);
/// assert_eq!(balances[0].year, 2024);
/// assert_eq!(balances[2].year, 2026);
/// ```
pub fn balances_for_years(
    employee: &Employee,
    start_year: i32,
    end_year: i32,
    entries: &[VacationEntry],
) -> EngineResult<Vec<VacationBalance>> {
    let mut balances = Vec::new();
    for year in start_year..=end_year {
        let holidays = holidays_for_year(year, Some(employee.region));
        balances.push(balance_for_employee(employee, year, entries, &holidays)?);
    }

    debug!(
        employee_id = %employee.id,
        start_year,
        end_year,
        "aggregated balances across year span"
    );
    Ok(balances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn create_test_employee() -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Anna Schmidt".to_string(),
            allowance_days: Decimal::new(30, 0),
            region: Region::Hesse,
        }
    }

    // ==========================================================================
    // MY-001: Holiday span aggregation
    // ==========================================================================
    #[test]
    fn test_my_001_two_year_span_is_sorted_concatenation() {
        let mut expected = holidays_for_year(2024, None);
        expected.extend(holidays_for_year(2025, None));
        expected.sort_by_key(|h| h.date);

        assert_eq!(holidays_for_years(2024, 2025, None), expected);
    }

    #[test]
    fn test_my_002_single_year_span_equals_single_year_catalog() {
        assert_eq!(
            holidays_for_years(2025, 2025, None),
            holidays_for_year(2025, None)
        );
        assert_eq!(
            holidays_for_years(2025, 2025, Some(Region::Bavaria)),
            holidays_for_year(2025, Some(Region::Bavaria))
        );
    }

    #[test]
    fn test_my_003_span_is_sorted_across_year_boundary() {
        let span = holidays_for_years(2024, 2026, Some(Region::Saxony));
        for pair in span.windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }
        assert_eq!(span.first().unwrap().date, date("2024-01-01"));
        assert_eq!(span.last().unwrap().date, date("2026-12-26"));
    }

    #[test]
    fn test_my_004_inverted_span_is_empty() {
        assert!(holidays_for_years(2026, 2024, None).is_empty());
    }

    #[test]
    fn test_my_005_region_filter_applies_to_every_year() {
        let span = holidays_for_years(2024, 2025, Some(Region::Bremen));
        assert_eq!(span.len(), 18);
        assert!(span.iter().all(|h| h.is_federal()));
    }

    // ==========================================================================
    // MY-010: Balance span aggregation
    // ==========================================================================
    #[test]
    fn test_my_010_one_balance_per_year_ascending() {
        let employee = create_test_employee();
        let balances = balances_for_years(&employee, 2024, 2026, &[]).unwrap();

        assert_eq!(balances.len(), 3);
        assert_eq!(
            balances.iter().map(|b| b.year).collect::<Vec<_>>(),
            vec![2024, 2025, 2026]
        );
    }

    #[test]
    fn test_my_011_entry_spanning_new_year_splits_across_balances() {
        let employee = create_test_employee();
        let entries = vec![VacationEntry {
            id: "vac_001".to_string(),
            employee_id: "emp_001".to_string(),
            start_date: date("2025-12-29"),
            end_date: date("2026-01-02"),
            note: None,
        }];

        let balances = balances_for_years(&employee, 2025, 2026, &entries).unwrap();
        assert_eq!(balances[0].used_days, Decimal::new(3, 0));
        assert_eq!(balances[1].used_days, Decimal::new(1, 0));
    }

    #[test]
    fn test_my_012_inverted_span_yields_no_balances() {
        let employee = create_test_employee();
        let balances = balances_for_years(&employee, 2026, 2024, &[]).unwrap();
        assert!(balances.is_empty());
    }
}
