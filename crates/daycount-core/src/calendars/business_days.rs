//! Business-day enumeration between two instants.
//!
//! Enumeration is directional: it walks forward from `start` in 24-hour
//! steps and never past `end`, so a `start` after `end` yields nothing.

use chrono::{Days, Duration, NaiveDateTime};

use super::{Calendar, WeekendCalendar};
use crate::types::Date;

/// A value that can be stepped forward one day at a time.
///
/// Implemented for [`Date`] and for `chrono::NaiveDateTime`, where the time of
/// day is carried through every step.
pub trait DayStep: Copy + PartialOrd {
    /// The value 24 hours later, or `None` past the representable range.
    fn next_day(self) -> Option<Self>;

    /// The calendar day this value falls on.
    fn calendar_date(self) -> Date;

    /// Whole 24-hour periods from `self` to `other`, truncated toward zero.
    fn whole_days_until(self, other: Self) -> i64;
}

impl DayStep for Date {
    fn next_day(self) -> Option<Self> {
        self.as_naive_date()
            .checked_add_days(Days::new(1))
            .map(Date::from)
    }

    fn calendar_date(self) -> Date {
        self
    }

    fn whole_days_until(self, other: Self) -> i64 {
        self.days_between(&other)
    }
}

impl DayStep for NaiveDateTime {
    fn next_day(self) -> Option<Self> {
        self.checked_add_signed(Duration::hours(24))
    }

    fn calendar_date(self) -> Date {
        Date::from(self.date())
    }

    fn whole_days_until(self, other: Self) -> i64 {
        (other - self).num_days()
    }
}

/// Whole 24-hour periods between two instants, truncated toward zero.
#[must_use]
pub fn whole_days_between<T: DayStep>(start: T, end: T) -> i64 {
    start.whole_days_until(end)
}

/// Returns the business days from `start` to `end` (both inclusive) under
/// `calendar`, in chronological order.
pub fn business_times_with<T, C>(start: T, end: T, calendar: &C) -> Vec<T>
where
    T: DayStep,
    C: Calendar + ?Sized,
{
    let capacity = usize::try_from(whole_days_between(start, end)).unwrap_or(0);
    let mut times = Vec::with_capacity(capacity);

    let mut current = Some(start);
    while let Some(time) = current.filter(|time| *time <= end) {
        if calendar.is_business_day(time.calendar_date()) {
            times.push(time);
        }
        current = time.next_day();
    }

    tracing::trace!(
        calendar = calendar.name(),
        business_days = times.len(),
        "enumerated business days"
    );
    times
}

/// Returns the business days from `start` to `end` (both inclusive),
/// treating only weekends as non-business days.
///
/// # Example
///
/// ```rust
/// use daycount_core::calendars::business_times;
/// use daycount_core::types::Date;
///
/// let start = Date::from_ymd(2020, 1, 3).unwrap(); // Friday
/// let end = Date::from_ymd(2020, 1, 6).unwrap(); // Monday
///
/// assert_eq!(business_times(start, end), vec![start, end]);
/// ```
pub fn business_times<T: DayStep>(start: T, end: T) -> Vec<T> {
    business_times_with(start, end, &WeekendCalendar)
}

/// Number of business-day gaps between `start` and `end` under `calendar`.
///
/// This is the length of the enumerated sequence minus one: a single
/// business day gives 0, and an empty sequence gives -1.
pub fn business_days_between_with<T, C>(start: T, end: T, calendar: &C) -> i64
where
    T: DayStep,
    C: Calendar + ?Sized,
{
    business_times_with(start, end, calendar).len() as i64 - 1
}

/// Number of business-day gaps between `start` and `end`, treating only
/// weekends as non-business days.
pub fn business_days_between<T: DayStep>(start: T, end: T) -> i64 {
    business_days_between_with(start, end, &WeekendCalendar)
}
