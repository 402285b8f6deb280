//! Day count conventions for fixed income calculations.
//!
//! Day count conventions determine how a calendar span is turned into a
//! fraction of a year for interest accrual.
//!
//! # Supported Conventions
//!
//! ## ACT Family (Actual numerator)
//!
//! - [`ActAct`]: Actual/Actual - Year-based split over leap and common years
//! - [`ActActAfb`]: Actual/Actual AFB - French convention, backward induction
//! - [`Act360`]: Actual/360 - Money market convention
//! - [`Act365Fixed`]: Actual/365 Fixed
//!
//! ## 30/360 Family (Assumes 30-day months, 360-day years)
//!
//! - [`Thirty360US`]: 30/360 US
//! - [`Thirty360European`]: 30/360 European
//! - [`Thirty360Italian`]: 30/360 Italian (February 28th/29th count as the 30th)
//! - [`Thirty360German`]: 30/360 German (last day of February counts as the 30th)
//!
//! # Usage
//!
//! ```rust
//! use daycount_core::daycounts::{year_fraction, Convention, DayCount, Thirty360US};
//! use daycount_core::types::Date;
//!
//! let start = Date::from_ymd(2018, 1, 1).unwrap();
//! let end = Date::from_ymd(2018, 7, 31).unwrap();
//!
//! let yf = year_fraction(start, end, Convention::ActualThreeSixty);
//! assert_eq!(yf, 211.0 / 360.0);
//!
//! let days = Thirty360US.day_count(start, end);
//! assert_eq!(days, 210);
//! ```
//!
//! # Sign
//!
//! Every convention satisfies `f(d, d) == 0` and `f(a, b) == -f(b, a)`:
//! the dates are put in chronological order, the magnitude is computed on
//! the ordered pair and the sign is applied afterwards.

mod act360;
mod act365;
mod actact;
mod convention;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365Fixed;
pub use actact::{ActAct, ActActAfb};
pub use convention::{
    convention_name, day_counter_for_code, year_fraction, year_fraction_for_code, Convention,
    DayCounter, UNSUPPORTED_CONVENTION_NAME,
};
pub use thirty360::{Thirty360European, Thirty360German, Thirty360Italian, Thirty360US};

use std::cmp::Ordering;
use std::ops::Neg;

use crate::types::Date;

/// Days in a 360-day year.
pub const THREE_SIXTY_DAYS: f64 = 360.0;
/// Days in a common year.
pub const THREE_SIXTY_FIVE_DAYS: f64 = 365.0;
/// Days in a leap year.
pub const THREE_SIXTY_SIX_DAYS: f64 = 366.0;

/// Trait for day count conventions.
///
/// Implementations provide the year fraction calculation between two dates
/// according to specific market conventions.
///
/// # Implementation Notes
///
/// - `year_fraction` returns the fraction of a year between dates
/// - `day_count` returns the number of days according to the convention
/// - Both are antisymmetric in their arguments and zero for equal dates;
///   every implementation evaluates them through `oriented`
/// - Implementations must be thread-safe (`Send + Sync`)
pub trait DayCount: Send + Sync {
    /// Returns the canonical name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end` is before `start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates.
    ///
    /// For ACT conventions this is actual calendar days; for 30/360
    /// conventions it is the numerator of the 30/360 formula.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Returns true if `year` is a Gregorian leap year.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `year` as a year-fraction denominator.
#[must_use]
pub fn days_per_year(year: i32) -> f64 {
    if is_leap_year(year) {
        THREE_SIXTY_SIX_DAYS
    } else {
        THREE_SIXTY_FIVE_DAYS
    }
}

/// Evaluates `magnitude` on the chronologically ordered pair and restores
/// the sign of the original orientation. Equal dates short-circuit to zero.
pub(crate) fn oriented<T, F>(start: Date, end: Date, magnitude: F) -> T
where
    T: Default + Neg<Output = T>,
    F: FnOnce(Date, Date) -> T,
{
    match start.cmp(&end) {
        Ordering::Equal => T::default(),
        Ordering::Less => magnitude(start, end),
        Ordering::Greater => -magnitude(end, start),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year() {
        for (year, expected) in [
            (2012, true),
            (2015, false),
            (2016, true),
            (2021, false),
            (2100, false),
            (2000, true),
        ] {
            assert_eq!(is_leap_year(year), expected, "{year}");
        }
    }

    #[test]
    fn test_days_per_year() {
        assert_eq!(days_per_year(2015), THREE_SIXTY_FIVE_DAYS);
        assert_eq!(days_per_year(2000), THREE_SIXTY_SIX_DAYS);
        assert_eq!(days_per_year(1900), THREE_SIXTY_FIVE_DAYS);
    }

    #[test]
    fn test_oriented_sign() {
        let a = Date::from_ymd(2020, 1, 1).unwrap();
        let b = Date::from_ymd(2020, 1, 11).unwrap();
        let days = |from: Date, to: Date| from.days_between(&to);

        assert_eq!(oriented(a, b, days), 10);
        assert_eq!(oriented(b, a, days), -10);
        assert_eq!(oriented(a, a, |_, _| 99_i64), 0);
    }

    #[test]
    fn test_day_count_sign_and_identity() {
        let a = Date::from_ymd(2008, 2, 29).unwrap();
        let b = Date::from_ymd(2011, 1, 31).unwrap();

        for convention in Convention::all() {
            let dc = convention.implementation();
            assert!(dc.day_count(a, b) > 0, "{convention}");
            assert_eq!(dc.day_count(a, b), -dc.day_count(b, a), "{convention}");
            assert_eq!(dc.day_count(b, b), 0, "{convention}");
        }
    }

    #[test]
    fn test_every_convention_is_half_a_year_ish() {
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 7, 1).unwrap();

        for convention in Convention::all() {
            let yf = year_fraction(start, end, *convention);
            assert!(yf > 0.49 && yf < 0.51, "{convention}: {yf}");
        }
    }
}
