//! Actual/365 Fixed day count convention.

use super::{oriented, DayCount, THREE_SIXTY_FIVE_DAYS};
use crate::types::Date;

/// Actual/365 Fixed day count convention.
///
/// The numerator is the actual number of days between the two dates and the
/// denominator is always 365, leap years included.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ActualThreeSixtyFiveFixed"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        oriented(start, end, |from, to| {
            from.days_between(&to) as f64 / THREE_SIXTY_FIVE_DAYS
        })
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        oriented(start, end, |from, to| from.days_between(&to))
    }
}
