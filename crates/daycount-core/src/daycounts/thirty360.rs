//! 30/360 day count conventions.
//!
//! Every variant feeds (possibly adjusted) endpoints into the same day-count
//! formula and divides by 360. They differ only in how the endpoints are
//! adjusted beforehand.

use super::{oriented, DayCount, THREE_SIXTY_DAYS};
use crate::types::Date;

// =============================================================================
// Helper Functions
// =============================================================================

/// Year, month and day of an endpoint after convention-specific adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Endpoint {
    year: i64,
    month: i64,
    day: i64,
}

impl Endpoint {
    fn with_day(self, day: i64) -> Self {
        Self { day, ..self }
    }
}

impl From<Date> for Endpoint {
    fn from(date: Date) -> Self {
        Self {
            year: i64::from(date.year()),
            month: i64::from(date.month()),
            day: i64::from(date.day()),
        }
    }
}

/// Shared 30/360 numerator.
///
/// $$360 (Y_2 - Y_1) + 30 (M_2 - M_1 - 1) + \max(0, 30 - D_1) + \min(30, D_2)$$
#[inline]
fn thirty_360_days(from: Endpoint, to: Endpoint) -> i64 {
    360 * (to.year - from.year)
        + 30 * (to.month - from.month - 1)
        + (30 - from.day).max(0)
        + to.day.min(30)
}

/// Checks if a date is the last day of February (28th, or 29th in leap years).
#[inline]
fn is_last_day_of_february(date: Date) -> bool {
    date.month() == 2 && date.day() == date.days_in_month()
}

fn year_fraction_from_days(days: i64) -> f64 {
    days as f64 / THREE_SIXTY_DAYS
}

// =============================================================================
// 30/360 US
// =============================================================================

/// 30/360 US day count convention.
///
/// # Rules
///
/// If D2 is the 31st and D1 is before the 30th, the end date moves to the
/// first day of the following month. Otherwise the shared formula caps both
/// days at 30. At the end of the representable range there is no following
/// month, so D2 stays on the 31st and is capped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360US;

impl Thirty360US {
    fn days(from: Date, to: Date) -> i64 {
        let to = if to.day() == 31 && from.day() < 30 {
            to.checked_add_days(1).unwrap_or(to)
        } else {
            to
        };

        thirty_360_days(from.into(), to.into())
    }
}

impl DayCount for Thirty360US {
    fn name(&self) -> &'static str {
        "ThirtyThreeSixtyUS"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        oriented(start, end, |from, to| year_fraction_from_days(Self::days(from, to)))
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        oriented(start, end, Self::days)
    }
}

// =============================================================================
// 30/360 European
// =============================================================================

/// 30/360 European day count convention.
///
/// # Rules
///
/// 1. If D1 is 31, it counts as 30
/// 2. If D2 is 31, it counts as 30
///
/// No special February handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360European;

impl Thirty360European {
    fn days(from: Date, to: Date) -> i64 {
        thirty_360_days(from.into(), to.into())
    }
}

impl DayCount for Thirty360European {
    fn name(&self) -> &'static str {
        "ThirtyThreeSixtyEuropean"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        oriented(start, end, |from, to| year_fraction_from_days(Self::days(from, to)))
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        oriented(start, end, Self::days)
    }
}

// =============================================================================
// 30/360 Italian
// =============================================================================

/// 30/360 Italian day count convention.
///
/// # Rules
///
/// 1. If D1 is 31, or February 28th or 29th, it counts as 30
/// 2. If D2 is 31, or February 28th or 29th, it counts as 30
///
/// February 28th counts as the 30th even in leap years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360Italian;

impl Thirty360Italian {
    fn adjust(date: Date) -> Endpoint {
        let endpoint = Endpoint::from(date);
        if date.month() == 2 && date.day() >= 28 {
            endpoint.with_day(30)
        } else {
            endpoint
        }
    }

    fn days(from: Date, to: Date) -> i64 {
        thirty_360_days(Self::adjust(from), Self::adjust(to))
    }
}

impl DayCount for Thirty360Italian {
    fn name(&self) -> &'static str {
        "ThirtyThreeSixtyItalian"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        oriented(start, end, |from, to| year_fraction_from_days(Self::days(from, to)))
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        oriented(start, end, Self::days)
    }
}

// =============================================================================
// 30/360 German
// =============================================================================

/// 30/360 German day count convention.
///
/// # Rules
///
/// 1. If D1 is 31, or the last day of February, it counts as 30
/// 2. If D2 is 31, or the last day of February, it counts as 30
///
/// Unlike the Italian variant, February 28th of a leap year is left alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360German;

impl Thirty360German {
    fn adjust(date: Date) -> Endpoint {
        let endpoint = Endpoint::from(date);
        if is_last_day_of_february(date) {
            endpoint.with_day(30)
        } else {
            endpoint
        }
    }

    fn days(from: Date, to: Date) -> i64 {
        thirty_360_days(Self::adjust(from), Self::adjust(to))
    }
}

impl DayCount for Thirty360German {
    fn name(&self) -> &'static str {
        "ThirtyThreeSixtyGerman"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        oriented(start, end, |from, to| year_fraction_from_days(Self::days(from, to)))
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        oriented(start, end, Self::days)
    }
}
