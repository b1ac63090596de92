//! Vacation balance model.
//!
//! This module contains the derived [`VacationBalance`] record. Balances are
//! computed per call and never stored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The derived vacation balance of an employee for one calendar year.
///
/// `remaining_days` is signed: a negative value means the employee has
/// booked more working days than the allowance covers. The signed value is
/// authoritative; callers that want a floor of zero for display use
/// [`VacationBalance::clamped_remaining`].
///
/// # Example
///
/// ```
/// use vacation_engine::models::VacationBalance;
/// use rust_decimal::Decimal;
///
/// let balance = VacationBalance {
///     employee_id: "emp_001".to_string(),
///     year: 2025,
///     allowance_days: Decimal::new(30, 0),
///     used_days: Decimal::new(12, 0),
///     remaining_days: Decimal::new(18, 0),
/// };
/// assert_eq!(balance.remaining_days, Decimal::new(18, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationBalance {
    /// The employee this balance belongs to.
    pub employee_id: String,
    /// The calendar year the balance was computed for.
    pub year: i32,
    /// The annual allowance in days.
    pub allowance_days: Decimal,
    /// Working days consumed by vacation entries within the year.
    pub used_days: Decimal,
    /// `allowance_days - used_days`, signed.
    pub remaining_days: Decimal,
}

impl VacationBalance {
    /// Returns the remaining days floored at zero, for display contexts
    /// that must not show negative balances.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::models::VacationBalance;
    /// use rust_decimal::Decimal;
    ///
    /// let balance = VacationBalance {
    ///     employee_id: "emp_001".to_string(),
    ///     year: 2025,
    ///     allowance_days: Decimal::new(30, 0),
    ///     used_days: Decimal::new(33, 0),
    ///     remaining_days: Decimal::new(-3, 0),
    /// };
    /// assert_eq!(balance.clamped_remaining(), Decimal::ZERO);
    /// ```
    pub fn clamped_remaining(&self) -> Decimal {
        self.remaining_days.max(Decimal::ZERO)
    }

    /// Returns true if the employee has used more days than the allowance.
    pub fn is_overdrawn(&self) -> bool {
        self.remaining_days < Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_balance(allowance: i64, used: i64) -> VacationBalance {
        VacationBalance {
            employee_id: "emp_001".to_string(),
            year: 2025,
            allowance_days: Decimal::new(allowance, 0),
            used_days: Decimal::new(used, 0),
            remaining_days: Decimal::new(allowance - used, 0),
        }
    }

    #[test]
    fn test_positive_remaining_is_not_clamped() {
        let balance = create_balance(30, 12);
        assert_eq!(balance.clamped_remaining(), Decimal::new(18, 0));
        assert!(!balance.is_overdrawn());
    }

    #[test]
    fn test_negative_remaining_is_preserved() {
        let balance = create_balance(30, 33);
        assert_eq!(balance.remaining_days, Decimal::new(-3, 0));
        assert!(balance.is_overdrawn());
    }

    #[test]
    fn test_clamped_remaining_floors_at_zero() {
        let balance = create_balance(30, 33);
        assert_eq!(balance.clamped_remaining(), Decimal::ZERO);
    }

    #[test]
    fn test_zero_remaining() {
        let balance = create_balance(30, 30);
        assert_eq!(balance.remaining_days, Decimal::ZERO);
        assert!(!balance.is_overdrawn());
    }

    #[test]
    fn test_serialize_balance() {
        let balance = create_balance(30, 12);
        let json = serde_json::to_string(&balance).unwrap();
        assert!(json.contains("\"employee_id\":\"emp_001\""));
        assert!(json.contains("\"year\":2025"));
        assert!(json.contains("\"allowance_days\":\"30\""));
        assert!(json.contains("\"used_days\":\"12\""));
        assert!(json.contains("\"remaining_days\":\"18\""));
    }

    #[test]
    fn test_deserialize_balance() {
        let json = r#"{
            "employee_id": "emp_002",
            "year": 2024,
            "allowance_days": "27.5",
            "used_days": "10",
            "remaining_days": "17.5"
        }"#;
        let balance: VacationBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.year, 2024);
        assert_eq!(balance.allowance_days, Decimal::new(275, 1));
        assert_eq!(balance.remaining_days, Decimal::new(175, 1));
    }
}
