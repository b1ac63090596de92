//! Employee model.
//!
//! This module defines the [`Employee`] struct as consumed by the balance
//! calculations. The engine only reads these fields; allowances are edited
//! and persisted elsewhere.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Region;

/// An employee whose vacation balance is calculated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// Annual vacation allowance in days (non-negative, 0.5-day steps).
    pub allowance_days: Decimal,
    /// The state whose holiday calendar applies to this employee.
    pub region: Region,
}

impl Employee {
    /// Returns true if the given number of additional days fits in the
    /// allowance alongside the days already used.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacation_engine::models::{Employee, Region};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Anna Schmidt".to_string(),
    ///     allowance_days: Decimal::new(30, 0),
    ///     region: Region::Bavaria,
    /// };
    /// assert!(employee.has_allowance_for(Decimal::new(28, 0), Decimal::new(2, 0)));
    /// assert!(!employee.has_allowance_for(Decimal::new(28, 0), Decimal::new(3, 0)));
    /// ```
    pub fn has_allowance_for(&self, used_days: Decimal, additional_days: Decimal) -> bool {
        used_days + additional_days <= self.allowance_days
    }
}
