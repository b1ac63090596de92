//! Date range overlap detection.
//!
//! This module provides the inclusive-range intersection test used by
//! vacation request validation.

use chrono::NaiveDate;

/// Checks whether two inclusive date ranges share at least one calendar day.
///
/// The test is `start_a <= end_b && start_b <= end_a`. It is symmetric in
/// its two ranges, and a degenerate single-day range overlaps itself.
///
/// Callers are expected to pass well-formed ranges (`start <= end`); this
/// function does not validate them.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::ranges_overlap;
/// use chrono::NaiveDate;
///
/// let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
///
/// // Sharing March 12 to 14
/// assert!(ranges_overlap(
///     d("2025-03-10"), d("2025-03-14"),
///     d("2025-03-12"), d("2025-03-16"),
/// ));
///
/// // Disjoint
/// assert!(!ranges_overlap(
///     d("2025-03-10"), d("2025-03-14"),
///     d("2025-03-15"), d("2025-03-20"),
/// ));
/// ```
pub fn ranges_overlap(
    start_a: NaiveDate,
    end_a: NaiveDate,
    start_b: NaiveDate,
    end_b: NaiveDate,
) -> bool {
    start_a <= end_b && start_b <= end_a
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_partial_overlap() {
        assert!(ranges_overlap(
            date("2025-03-10"),
            date("2025-03-14"),
            date("2025-03-12"),
            date("2025-03-16"),
        ));
    }

    #[test]
    fn test_containment_overlaps() {
        assert!(ranges_overlap(
            date("2025-03-01"),
            date("2025-03-31"),
            date("2025-03-10"),
            date("2025-03-14"),
        ));
    }

    #[test]
    fn test_shared_boundary_day_overlaps() {
        assert!(ranges_overlap(
            date("2025-03-10"),
            date("2025-03-14"),
            date("2025-03-14"),
            date("2025-03-20"),
        ));
    }

    #[test]
    fn test_adjacent_ranges_do_not_overlap() {
        assert!(!ranges_overlap(
            date("2025-03-10"),
            date("2025-03-14"),
            date("2025-03-15"),
            date("2025-03-20"),
        ));
    }

    #[test]
    fn test_disjoint_ranges() {
        assert!(!ranges_overlap(
            date("2025-01-01"),
            date("2025-01-05"),
            date("2025-06-01"),
            date("2025-06-05"),
        ));
    }

    #[test]
    fn test_symmetry() {
        let (a1, a2) = (date("2025-03-10"), date("2025-03-14"));
        let (b1, b2) = (date("2025-03-12"), date("2025-03-16"));
        assert_eq!(
            ranges_overlap(a1, a2, b1, b2),
            ranges_overlap(b1, b2, a1, a2)
        );

        let (c1, c2) = (date("2025-04-01"), date("2025-04-02"));
        assert_eq!(
            ranges_overlap(a1, a2, c1, c2),
            ranges_overlap(c1, c2, a1, a2)
        );
    }

    #[test]
    fn test_single_day_range_overlaps_itself() {
        let day = date("2025-03-12");
        assert!(ranges_overlap(day, day, day, day));
    }

    #[test]
    fn test_range_overlaps_itself() {
        let (start, end) = (date("2025-03-10"), date("2025-03-14"));
        assert!(ranges_overlap(start, end, start, end));
    }
}
