//! Region codes for the German federal states.
//!
//! This module defines the [`Region`] enum covering the 16 German states
//! plus the nationwide `DE` sentinel used for the federal aggregate view.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A German federal state, or the nationwide aggregate.
///
/// Each state is identified by its official two-letter code (ISO 3166-2:DE
/// without the `DE-` prefix). The [`Region::Germany`] sentinel (`DE`) stands
/// for "nationwide/federal-only" and matches every holiday when used as a
/// filter.
///
/// # Example
///
/// ```
/// use vacation_engine::models::Region;
///
/// assert_eq!(Region::Bavaria.code(), "BY");
/// assert_eq!(Region::from_code("BY"), Some(Region::Bavaria));
/// assert_eq!(Region::from_code("XX"), None);
/// assert_eq!(Region::Bavaria.to_string(), "BY");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Baden-Württemberg (BW).
    #[serde(rename = "BW")]
    BadenWuerttemberg,
    /// Bavaria / Bayern (BY).
    #[serde(rename = "BY")]
    Bavaria,
    /// Berlin (BE).
    #[serde(rename = "BE")]
    Berlin,
    /// Brandenburg (BB).
    #[serde(rename = "BB")]
    Brandenburg,
    /// Bremen (HB).
    #[serde(rename = "HB")]
    Bremen,
    /// Hamburg (HH).
    #[serde(rename = "HH")]
    Hamburg,
    /// Hesse / Hessen (HE).
    #[serde(rename = "HE")]
    Hesse,
    /// Mecklenburg-Vorpommern (MV).
    #[serde(rename = "MV")]
    MecklenburgVorpommern,
    /// Lower Saxony / Niedersachsen (NI).
    #[serde(rename = "NI")]
    LowerSaxony,
    /// North Rhine-Westphalia / Nordrhein-Westfalen (NW).
    #[serde(rename = "NW")]
    NorthRhineWestphalia,
    /// Rhineland-Palatinate / Rheinland-Pfalz (RP).
    #[serde(rename = "RP")]
    RhinelandPalatinate,
    /// Saarland (SL).
    #[serde(rename = "SL")]
    Saarland,
    /// Saxony / Sachsen (SN).
    #[serde(rename = "SN")]
    Saxony,
    /// Saxony-Anhalt / Sachsen-Anhalt (ST).
    #[serde(rename = "ST")]
    SaxonyAnhalt,
    /// Schleswig-Holstein (SH).
    #[serde(rename = "SH")]
    SchleswigHolstein,
    /// Thuringia / Thüringen (TH).
    #[serde(rename = "TH")]
    Thuringia,
    /// The nationwide aggregate (DE), not an individual state.
    #[serde(rename = "DE")]
    Germany,
}

/// Error returned when parsing an unrecognized region code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized region code: {0}")]
pub struct ParseRegionError(pub String);

impl Region {
    /// The 16 federal states, excluding the [`Region::Germany`] sentinel.
    pub const STATES: [Region; 16] = [
        Region::BadenWuerttemberg,
        Region::Bavaria,
        Region::Berlin,
        Region::Brandenburg,
        Region::Bremen,
        Region::Hamburg,
        Region::Hesse,
        Region::MecklenburgVorpommern,
        Region::LowerSaxony,
        Region::NorthRhineWestphalia,
        Region::RhinelandPalatinate,
        Region::Saarland,
        Region::Saxony,
        Region::SaxonyAnhalt,
        Region::SchleswigHolstein,
        Region::Thuringia,
    ];

    /// Returns the two-letter region code (e.g. `"BY"`).
    pub fn code(&self) -> &'static str {
        match self {
            Region::BadenWuerttemberg => "BW",
            Region::Bavaria => "BY",
            Region::Berlin => "BE",
            Region::Brandenburg => "BB",
            Region::Bremen => "HB",
            Region::Hamburg => "HH",
            Region::Hesse => "HE",
            Region::MecklenburgVorpommern => "MV",
            Region::LowerSaxony => "NI",
            Region::NorthRhineWestphalia => "NW",
            Region::RhinelandPalatinate => "RP",
            Region::Saarland => "SL",
            Region::Saxony => "SN",
            Region::SaxonyAnhalt => "ST",
            Region::SchleswigHolstein => "SH",
            Region::Thuringia => "TH",
            Region::Germany => "DE",
        }
    }

    /// Returns the official German name of the state.
    pub fn name(&self) -> &'static str {
        match self {
            Region::BadenWuerttemberg => "Baden-Württemberg",
            Region::Bavaria => "Bayern",
            Region::Berlin => "Berlin",
            Region::Brandenburg => "Brandenburg",
            Region::Bremen => "Bremen",
            Region::Hamburg => "Hamburg",
            Region::Hesse => "Hessen",
            Region::MecklenburgVorpommern => "Mecklenburg-Vorpommern",
            Region::LowerSaxony => "Niedersachsen",
            Region::NorthRhineWestphalia => "Nordrhein-Westfalen",
            Region::RhinelandPalatinate => "Rheinland-Pfalz",
            Region::Saarland => "Saarland",
            Region::Saxony => "Sachsen",
            Region::SaxonyAnhalt => "Sachsen-Anhalt",
            Region::SchleswigHolstein => "Schleswig-Holstein",
            Region::Thuringia => "Thüringen",
            Region::Germany => "Deutschland",
        }
    }

    /// Parses a two-letter region code.
    ///
    /// Matching is exact: codes are uppercase, and anything unrecognized
    /// returns `None` rather than an error so that callers filtering by
    /// user-supplied codes stay branch-free.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::models::Region;
    ///
    /// assert_eq!(Region::from_code("SN"), Some(Region::Saxony));
    /// assert_eq!(Region::from_code("DE"), Some(Region::Germany));
    /// assert_eq!(Region::from_code("sn"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Region> {
        let region = match code {
            "BW" => Region::BadenWuerttemberg,
            "BY" => Region::Bavaria,
            "BE" => Region::Berlin,
            "BB" => Region::Brandenburg,
            "HB" => Region::Bremen,
            "HH" => Region::Hamburg,
            "HE" => Region::Hesse,
            "MV" => Region::MecklenburgVorpommern,
            "NI" => Region::LowerSaxony,
            "NW" => Region::NorthRhineWestphalia,
            "RP" => Region::RhinelandPalatinate,
            "SL" => Region::Saarland,
            "SN" => Region::Saxony,
            "ST" => Region::SaxonyAnhalt,
            "SH" => Region::SchleswigHolstein,
            "TH" => Region::Thuringia,
            "DE" => Region::Germany,
            _ => return None,
        };
        Some(region)
    }

    /// Returns true if this is an individual state rather than the
    /// nationwide sentinel.
    pub fn is_state(&self) -> bool {
        *self != Region::Germany
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::from_code(s).ok_or_else(|| ParseRegionError(s.to_string()))
    }
}
