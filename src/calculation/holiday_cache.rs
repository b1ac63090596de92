//! Explicit memoization for holiday catalogs.
//!
//! Holiday generation is cheap but not free; callers iterating many
//! employees over the same years can hold a [`HolidayCache`] instead of
//! regenerating catalogs per call. The cache is plain owned state with no
//! expiry: a year's holidays never change once computed.

use std::collections::HashMap;

use crate::models::{Holiday, Region};

use super::holiday_catalog::holidays_for_year;

/// A memoizing wrapper over [`holidays_for_year`], keyed by year and region.
///
/// The cache is caller-owned and injectable; there is no global instance.
/// Dropping it drops all cached catalogs.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::HolidayCache;
/// use vacation_engine::models::Region;
///
/// let mut cache = HolidayCache::new();
/// let first = cache.holidays(2025, Some(Region::Bavaria)).to_vec();
/// let second = cache.holidays(2025, Some(Region::Bavaria)).to_vec();
///
/// assert_eq!(first, second);
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HolidayCache {
    catalogs: HashMap<(i32, Option<Region>), Vec<Holiday>>,
}

impl HolidayCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the holidays for a year and region, computing them on first
    /// access.
    pub fn holidays(&mut self, year: i32, region: Option<Region>) -> &[Holiday] {
        self.catalogs
            .entry((year, region))
            .or_insert_with(|| holidays_for_year(year, region))
    }

    /// Returns the number of cached catalogs.
    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    /// Returns true if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    /// Drops all cached catalogs.
    pub fn clear(&mut self) {
        self.catalogs.clear();
    }
}
