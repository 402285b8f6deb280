//! Convention identifiers and dispatch to the year fraction algorithms.

use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{
    Act360, Act365Fixed, ActAct, ActActAfb, DayCount, Thirty360European, Thirty360German,
    Thirty360Italian, Thirty360US,
};
use crate::error::DayCountError;
use crate::types::Date;

/// A year fraction algorithm: `(from, to) -> fraction of a year`.
pub type DayCounter = fn(Date, Date) -> f64;

/// Name reported for integer codes outside the supported range.
pub const UNSUPPORTED_CONVENTION_NAME: &str = "Unsupported";

/// Enumeration of all supported day count conventions.
///
/// The discriminant doubles as the integer code accepted by
/// [`day_counter_for_code`]. Codes outside `0..=7` are still valid inputs
/// there; they resolve to Actual/Actual.
///
/// # Example
///
/// ```rust
/// use daycount_core::daycounts::Convention;
/// use daycount_core::types::Date;
///
/// let convention: Convention = "ThirtyThreeSixtyItalian".parse().unwrap();
/// let start = Date::from_ymd(2007, 12, 28).unwrap();
/// let end = Date::from_ymd(2008, 2, 29).unwrap();
///
/// assert_eq!(convention.year_fraction(start, end), 62.0 / 360.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Convention {
    // =========================================================================
    // ACT Family
    // =========================================================================
    /// Actual/Actual - days in leap years over 366, other days over 365
    #[default]
    ActualActual = 0,

    /// Actual/Actual AFB - full years backwards from the end date plus a stub
    ActualActualAFB = 1,

    /// Actual/360 - money market instruments
    ActualThreeSixty = 2,

    /// Actual/365 Fixed
    ActualThreeSixtyFiveFixed = 3,

    // =========================================================================
    // 30/360 Family
    // =========================================================================
    /// 30/360 US - end date on the 31st rolls to the 1st when D1 < 30
    ThirtyThreeSixtyUS = 4,

    /// 30/360 European
    ThirtyThreeSixtyEuropean = 5,

    /// 30/360 Italian - February 28th/29th count as the 30th
    ThirtyThreeSixtyItalian = 6,

    /// 30/360 German - last day of February counts as the 30th
    ThirtyThreeSixtyGerman = 7,
}

fn actual_actual(from: Date, to: Date) -> f64 {
    ActAct.year_fraction(from, to)
}

fn actual_actual_afb(from: Date, to: Date) -> f64 {
    ActActAfb.year_fraction(from, to)
}

fn actual_360(from: Date, to: Date) -> f64 {
    Act360.year_fraction(from, to)
}

fn actual_365_fixed(from: Date, to: Date) -> f64 {
    Act365Fixed.year_fraction(from, to)
}

fn thirty_360_us(from: Date, to: Date) -> f64 {
    Thirty360US.year_fraction(from, to)
}

fn thirty_360_european(from: Date, to: Date) -> f64 {
    Thirty360European.year_fraction(from, to)
}

fn thirty_360_italian(from: Date, to: Date) -> f64 {
    Thirty360Italian.year_fraction(from, to)
}

fn thirty_360_german(from: Date, to: Date) -> f64 {
    Thirty360German.year_fraction(from, to)
}

/// Dispatch table, indexed by convention code.
static DAY_COUNTERS: [DayCounter; 8] = [
    actual_actual,
    actual_actual_afb,
    actual_360,
    actual_365_fixed,
    thirty_360_us,
    thirty_360_european,
    thirty_360_italian,
    thirty_360_german,
];

impl Convention {
    /// Returns all conventions in code order.
    #[must_use]
    pub fn all() -> &'static [Convention] {
        &[
            Convention::ActualActual,
            Convention::ActualActualAFB,
            Convention::ActualThreeSixty,
            Convention::ActualThreeSixtyFiveFixed,
            Convention::ThirtyThreeSixtyUS,
            Convention::ThirtyThreeSixtyEuropean,
            Convention::ThirtyThreeSixtyItalian,
            Convention::ThirtyThreeSixtyGerman,
        ]
    }

    /// Returns the canonical name, as used by `Display` and `FromStr`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Convention::ActualActual => "ActualActual",
            Convention::ActualActualAFB => "ActualActualAFB",
            Convention::ActualThreeSixty => "ActualThreeSixty",
            Convention::ActualThreeSixtyFiveFixed => "ActualThreeSixtyFiveFixed",
            Convention::ThirtyThreeSixtyUS => "ThirtyThreeSixtyUS",
            Convention::ThirtyThreeSixtyEuropean => "ThirtyThreeSixtyEuropean",
            Convention::ThirtyThreeSixtyItalian => "ThirtyThreeSixtyItalian",
            Convention::ThirtyThreeSixtyGerman => "ThirtyThreeSixtyGerman",
        }
    }

    /// Returns the integer code of the convention.
    #[must_use]
    pub const fn code(&self) -> i64 {
        *self as i64
    }

    /// Looks up a convention by integer code.
    ///
    /// Returns `None` for codes outside the supported range.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Convention::ActualActual),
            1 => Some(Convention::ActualActualAFB),
            2 => Some(Convention::ActualThreeSixty),
            3 => Some(Convention::ActualThreeSixtyFiveFixed),
            4 => Some(Convention::ThirtyThreeSixtyUS),
            5 => Some(Convention::ThirtyThreeSixtyEuropean),
            6 => Some(Convention::ThirtyThreeSixtyItalian),
            7 => Some(Convention::ThirtyThreeSixtyGerman),
            _ => None,
        }
    }

    /// Returns the year fraction algorithm for this convention.
    #[must_use]
    pub fn day_counter(&self) -> DayCounter {
        DAY_COUNTERS[*self as usize]
    }

    /// Returns the implementation behind this convention.
    ///
    /// Useful when the convention's day count is needed as well as its
    /// year fraction.
    #[must_use]
    pub fn implementation(&self) -> &'static dyn DayCount {
        match self {
            Convention::ActualActual => &ActAct,
            Convention::ActualActualAFB => &ActActAfb,
            Convention::ActualThreeSixty => &Act360,
            Convention::ActualThreeSixtyFiveFixed => &Act365Fixed,
            Convention::ThirtyThreeSixtyUS => &Thirty360US,
            Convention::ThirtyThreeSixtyEuropean => &Thirty360European,
            Convention::ThirtyThreeSixtyItalian => &Thirty360Italian,
            Convention::ThirtyThreeSixtyGerman => &Thirty360German,
        }
    }

    /// Calculates the year fraction between two dates under this convention.
    #[must_use]
    pub fn year_fraction(&self, from: Date, to: Date) -> f64 {
        (self.day_counter())(from, to)
    }
}

/// Returns the year fraction algorithm for an integer convention code.
///
/// Codes outside the supported range (negative, or past the last variant)
/// fall back to Actual/Actual. This is not an error.
#[must_use]
pub fn day_counter_for_code(code: i64) -> DayCounter {
    match Convention::from_code(code) {
        Some(convention) => convention.day_counter(),
        None => {
            tracing::debug!(code, "unsupported convention code, using ActualActual");
            Convention::ActualActual.day_counter()
        }
    }
}

/// Returns the canonical name for an integer convention code, or
/// `"Unsupported"` for codes outside the supported range.
#[must_use]
pub fn convention_name(code: i64) -> &'static str {
    Convention::from_code(code).map_or(UNSUPPORTED_CONVENTION_NAME, |c| c.name())
}

/// Returns the year fraction between two dates according to `convention`.
///
/// # Example
///
/// ```rust
/// use daycount_core::daycounts::{year_fraction, Convention};
/// use daycount_core::types::Date;
///
/// let from = Date::from_ymd(2018, 1, 1).unwrap();
/// let to = Date::from_ymd(2018, 7, 31).unwrap();
///
/// assert_eq!(year_fraction(from, to, Convention::ActualThreeSixtyFiveFixed), 211.0 / 365.0);
/// assert_eq!(year_fraction(to, from, Convention::ActualThreeSixtyFiveFixed), -211.0 / 365.0);
/// ```
#[must_use]
pub fn year_fraction(from: Date, to: Date, convention: Convention) -> f64 {
    convention.year_fraction(from, to)
}

/// Returns the year fraction between two dates for an integer convention
/// code, falling back to Actual/Actual for unsupported codes.
#[must_use]
pub fn year_fraction_for_code(from: Date, to: Date, code: i64) -> f64 {
    day_counter_for_code(code)(from, to)
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Convention {
    type Err = DayCountError;

    /// Parses one of the canonical names. Matching is exact and
    /// case-sensitive; there are no aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Convention::all()
            .iter()
            .copied()
            .find(|convention| convention.name() == s)
            .ok_or_else(|| DayCountError::unrecognized_convention(s))
    }
}

impl TryFrom<i64> for Convention {
    type Error = i64;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Convention::from_code(code).ok_or(code)
    }
}

impl From<Convention> for i64 {
    fn from(convention: Convention) -> Self {
        convention.code()
    }
}

impl Serialize for Convention {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Convention {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ConventionVisitor)
    }
}

struct ConventionVisitor;

fn malformed<E: de::Error>(found: impl fmt::Display) -> E {
    E::custom(DayCountError::malformed_input(format!(
        "expected a convention name string, found {found}"
    )))
}

impl<'de> Visitor<'de> for ConventionVisitor {
    type Value = Convention;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a day count convention name")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.parse().map_err(E::custom)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Err(malformed(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Err(malformed(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Err(malformed(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Err(malformed(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(malformed("null"))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(malformed("null"))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<Self::Value, A::Error> {
        Err(malformed("a sequence"))
    }

    fn visit_map<A: MapAccess<'de>>(self, _map: A) -> Result<Self::Value, A::Error> {
        Err(malformed("a map"))
    }
}
