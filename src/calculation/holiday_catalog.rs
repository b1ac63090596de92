//! Public holiday catalog for the German federal states.
//!
//! This module generates the full holiday set for a year by composing
//! fixed-date federal holidays, Easter-relative federal holidays, and
//! state-specific holidays, and provides region filtering plus the
//! non-throwing convenience predicates used in display contexts.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::{Holiday, HolidayKind, Region};

use super::easter::easter_sunday;

fn fixed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixed holiday date")
}

fn federal(name: &str, date: NaiveDate, description: &str) -> Holiday {
    Holiday {
        name: name.to_string(),
        date,
        regions: Region::STATES.to_vec(),
        kind: HolidayKind::Federal,
        description: description.to_string(),
    }
}

fn state_holiday(
    name: &str,
    date: NaiveDate,
    kind: HolidayKind,
    regions: &[Region],
    description: &str,
) -> Holiday {
    Holiday {
        name: name.to_string(),
        date,
        regions: regions.to_vec(),
        kind,
        description: description.to_string(),
    }
}

/// Computes the Day of Repentance and Prayer (Buß- und Bettag) for a year.
///
/// The holiday falls on the Wednesday before November 23; when November 23
/// is itself a Wednesday the backward search reduces to a zero offset and
/// the holiday is November 23.
fn repentance_day(year: i32) -> NaiveDate {
    let nov_23 = fixed_date(year, 11, 23);
    let offset = (nov_23.weekday().num_days_from_monday() + 7
        - Weekday::Wed.num_days_from_monday())
        % 7;
    nov_23 - Duration::days(i64::from(offset))
}

/// Generates all public holidays of a year, optionally filtered to one state.
///
/// The full set contains the nine nationwide holidays (five fixed-date, four
/// Easter-relative) plus the eight state-specific holidays, each tagged with
/// the states observing it. Passing `Some(state)` filters to the holidays
/// observed in that state; `None` or `Some(Region::Germany)` returns the
/// full set.
///
/// The result is sorted ascending by date; holidays sharing a date keep
/// their generation order.
///
/// # Arguments
///
/// * `year` - The calendar year to generate holidays for
/// * `region` - Optional state filter
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::holidays_for_year;
/// use vacation_engine::models::Region;
///
/// let all = holidays_for_year(2025, None);
/// assert_eq!(all.len(), 17);
///
/// let berlin = holidays_for_year(2025, Some(Region::Berlin));
/// assert!(berlin.iter().any(|h| h.name == "Internationaler Frauentag"));
/// assert!(!berlin.iter().any(|h| h.name == "Heilige Drei Könige"));
/// ```
pub fn holidays_for_year(year: i32, region: Option<Region>) -> Vec<Holiday> {
    let easter = easter_sunday(year);
    let mut holidays = Vec::with_capacity(17);

    // Fixed-date federal holidays
    holidays.push(federal(
        "Neujahr",
        fixed_date(year, 1, 1),
        "New Year's Day",
    ));
    holidays.push(federal(
        "Tag der Arbeit",
        fixed_date(year, 5, 1),
        "Labour Day",
    ));
    holidays.push(federal(
        "Tag der Deutschen Einheit",
        fixed_date(year, 10, 3),
        "German Unity Day, the national day of Germany",
    ));
    holidays.push(federal(
        "1. Weihnachtstag",
        fixed_date(year, 12, 25),
        "Christmas Day",
    ));
    holidays.push(federal(
        "2. Weihnachtstag",
        fixed_date(year, 12, 26),
        "Boxing Day",
    ));

    // Easter-relative federal holidays
    holidays.push(federal(
        "Karfreitag",
        easter - Duration::days(2),
        "Good Friday, two days before Easter Sunday",
    ));
    holidays.push(federal(
        "Ostermontag",
        easter + Duration::days(1),
        "Easter Monday",
    ));
    holidays.push(federal(
        "Christi Himmelfahrt",
        easter + Duration::days(39),
        "Ascension Day, 39 days after Easter Sunday",
    ));
    holidays.push(federal(
        "Pfingstmontag",
        easter + Duration::days(50),
        "Whit Monday, 50 days after Easter Sunday",
    ));

    // State-specific holidays
    holidays.push(state_holiday(
        "Heilige Drei Könige",
        fixed_date(year, 1, 6),
        HolidayKind::Religious,
        &[
            Region::BadenWuerttemberg,
            Region::Bavaria,
            Region::SaxonyAnhalt,
        ],
        "Epiphany",
    ));
    holidays.push(state_holiday(
        "Internationaler Frauentag",
        fixed_date(year, 3, 8),
        HolidayKind::Regional,
        &[Region::Berlin],
        "International Women's Day",
    ));
    holidays.push(state_holiday(
        "Fronleichnam",
        easter + Duration::days(60),
        HolidayKind::Religious,
        &[
            Region::BadenWuerttemberg,
            Region::Bavaria,
            Region::Hesse,
            Region::NorthRhineWestphalia,
            Region::RhinelandPalatinate,
            Region::Saarland,
        ],
        "Corpus Christi, 60 days after Easter Sunday",
    ));
    holidays.push(state_holiday(
        "Mariä Himmelfahrt",
        fixed_date(year, 8, 15),
        HolidayKind::Religious,
        &[Region::Bavaria, Region::Saarland],
        "Assumption of Mary",
    ));
    holidays.push(state_holiday(
        "Weltkindertag",
        fixed_date(year, 9, 20),
        HolidayKind::Regional,
        &[Region::Thuringia],
        "World Children's Day",
    ));
    holidays.push(state_holiday(
        "Reformationstag",
        fixed_date(year, 10, 31),
        HolidayKind::Religious,
        &[
            Region::Brandenburg,
            Region::MecklenburgVorpommern,
            Region::Saxony,
            Region::SaxonyAnhalt,
            Region::Thuringia,
            Region::Hamburg,
            Region::LowerSaxony,
            Region::SchleswigHolstein,
        ],
        "Reformation Day",
    ));
    holidays.push(state_holiday(
        "Allerheiligen",
        fixed_date(year, 11, 1),
        HolidayKind::Religious,
        &[
            Region::BadenWuerttemberg,
            Region::Bavaria,
            Region::NorthRhineWestphalia,
            Region::RhinelandPalatinate,
            Region::Saarland,
        ],
        "All Saints' Day",
    ));
    holidays.push(state_holiday(
        "Buß- und Bettag",
        repentance_day(year),
        HolidayKind::Religious,
        &[Region::Saxony],
        "Day of Repentance and Prayer, the Wednesday before November 23",
    ));

    if let Some(state) = region {
        if state != Region::Germany {
            holidays.retain(|h| h.regions.contains(&state));
        }
    }

    // Stable sort keeps generation order for holidays sharing a date
    holidays.sort_by_key(|h| h.date);
    holidays
}

/// Generates the holidays of a year for a region given as a string code.
///
/// Unrecognized codes yield an empty list rather than an error, so that
/// downstream filtering code stays branch-free.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::holidays_for_region_code;
///
/// assert_eq!(holidays_for_region_code(2025, "BY").len(), 13);
/// assert!(holidays_for_region_code(2025, "XX").is_empty());
/// ```
pub fn holidays_for_region_code(year: i32, code: &str) -> Vec<Holiday> {
    match Region::from_code(code) {
        Some(region) => holidays_for_year(year, Some(region)),
        None => Vec::new(),
    }
}

/// Returns the nationwide holidays of a year (kind == federal).
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::federal_holidays;
///
/// assert_eq!(federal_holidays(2025).len(), 9);
/// ```
pub fn federal_holidays(year: i32) -> Vec<Holiday> {
    let mut holidays = holidays_for_year(year, None);
    holidays.retain(|h| h.is_federal());
    holidays
}

fn holiday_on(date: &str, region_code: &str) -> Option<Holiday> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    holidays_for_region_code(date.year(), region_code)
        .into_iter()
        .find(|h| h.date == date)
}

/// Checks whether a date string is a public holiday in a region.
///
/// This is a display-context convenience: malformed dates and unrecognized
/// region codes return `false` instead of an error, so callers can use the
/// predicate without guarding every call.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::is_holiday;
///
/// assert!(is_holiday("2025-10-03", "DE"));
/// assert!(is_holiday("2025-11-19", "SN"));
/// assert!(!is_holiday("2025-11-19", "BY"));
/// assert!(!is_holiday("not-a-date", "BY"));
/// assert!(!is_holiday("2025-10-03", "XX"));
/// ```
pub fn is_holiday(date: &str, region_code: &str) -> bool {
    holiday_on(date, region_code).is_some()
}

/// Returns the name of the holiday on a date in a region, if any.
///
/// Like [`is_holiday`], malformed input yields `None` rather than an error.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::holiday_name;
///
/// assert_eq!(
///     holiday_name("2025-10-03", "DE"),
///     Some("Tag der Deutschen Einheit".to_string())
/// );
/// assert_eq!(holiday_name("2025-10-04", "DE"), None);
/// assert_eq!(holiday_name("garbage", "DE"), None);
/// ```
pub fn holiday_name(date: &str, region_code: &str) -> Option<String> {
    holiday_on(date, region_code).map(|h| h.name)
}
