//! Actual/360 day count convention.
//!
//! Used primarily for money market instruments.

use super::{oriented, DayCount, THREE_SIXTY_DAYS};
use crate::types::Date;

/// Actual/360 day count convention.
///
/// The day count is the actual number of days between dates.
/// The year basis is always 360 days.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{360}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ActualThreeSixty"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        oriented(start, end, |from, to| {
            from.days_between(&to) as f64 / THREE_SIXTY_DAYS
        })
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        oriented(start, end, |from, to| from.days_between(&to))
    }
}
