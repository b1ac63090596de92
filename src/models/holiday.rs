//! Public holiday model.
//!
//! This module contains the [`Holiday`] and [`HolidayKind`] types produced
//! by the holiday catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Region;

/// Classifies a public holiday by its legal basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// Observed in all 16 states (fixed-date and Easter-relative nationwide
    /// holidays).
    Federal,
    /// Church-derived holiday observed in a subset of states.
    Religious,
    /// Secular holiday observed in a subset of states.
    Regional,
}

/// A public holiday on a specific date, tagged with the states observing it.
///
/// Holidays are value objects: the catalog recomputes them on demand and
/// never mutates one after generation. Federal holidays carry all 16 state
/// codes in their region set.
///
/// # Example
///
/// ```
/// use vacation_engine::models::{Holiday, HolidayKind, Region};
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     name: "Tag der Deutschen Einheit".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 10, 3).unwrap(),
///     regions: Region::STATES.to_vec(),
///     kind: HolidayKind::Federal,
///     description: "German Unity Day, the national day of Germany".to_string(),
/// };
///
/// assert!(holiday.observed_in(Region::Berlin));
/// assert!(holiday.observed_in(Region::Germany));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The official name of the holiday (e.g. "Karfreitag").
    pub name: String,
    /// The calendar date of the holiday (no time component).
    pub date: NaiveDate,
    /// The states in which the holiday is observed.
    pub regions: Vec<Region>,
    /// The legal classification of the holiday.
    pub kind: HolidayKind,
    /// A short human-readable description.
    pub description: String,
}

impl Holiday {
    /// Checks whether the holiday is observed in the given region.
    ///
    /// The [`Region::Germany`] sentinel matches every holiday, so callers
    /// asking for the nationwide view do not need a separate code path.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::models::{Holiday, HolidayKind, Region};
    /// use chrono::NaiveDate;
    ///
    /// let epiphany = Holiday {
    ///     name: "Heilige Drei Könige".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
    ///     regions: vec![Region::BadenWuerttemberg, Region::Bavaria, Region::SaxonyAnhalt],
    ///     kind: HolidayKind::Religious,
    ///     description: "Epiphany".to_string(),
    /// };
    ///
    /// assert!(epiphany.observed_in(Region::Bavaria));
    /// assert!(!epiphany.observed_in(Region::Berlin));
    /// ```
    pub fn observed_in(&self, region: Region) -> bool {
        region == Region::Germany || self.regions.contains(&region)
    }

    /// Returns true if the holiday is observed nationwide.
    pub fn is_federal(&self) -> bool {
        self.kind == HolidayKind::Federal
    }
}
