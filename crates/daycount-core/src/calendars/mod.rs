//! Business day calendars and business-day enumeration.
//!
//! This module provides:
//! - The [`Calendar`] workday predicate
//! - A weekend-only reference calendar with no holiday data
//! - Adapters for caller-supplied predicates and combined calendars
//! - Enumeration and counting of business days between two instants

mod business_days;

pub use business_days::{
    business_days_between, business_days_between_with, business_times, business_times_with,
    whole_days_between, DayStep,
};

use crate::types::Date;

/// Trait for business day calendars.
///
/// A calendar answers one question: is this calendar day a business day?
/// Implementations are expected to be cheap and deterministic; enumeration
/// calls them once per spanned day.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a holiday.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }
}

/// A simple weekend-only calendar (no holidays).
///
/// Saturdays and Sundays are the only non-business days.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}

/// Calendar backed by a caller-supplied predicate.
///
/// # Example
///
/// ```rust
/// use daycount_core::calendars::{Calendar, FnCalendar};
/// use daycount_core::types::Date;
///
/// let new_year = Date::from_ymd(2020, 1, 1).unwrap();
/// let calendar = FnCalendar::new(move |date: Date| !date.is_weekend() && date != new_year);
///
/// assert!(calendar.is_holiday(new_year));
/// ```
#[derive(Clone)]
pub struct FnCalendar<F> {
    predicate: F,
}

impl<F> FnCalendar<F>
where
    F: Fn(Date) -> bool + Send + Sync,
{
    /// Wraps a workday predicate.
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> Calendar for FnCalendar<F>
where
    F: Fn(Date) -> bool + Send + Sync,
{
    fn name(&self) -> &'static str {
        "Custom"
    }

    fn is_business_day(&self, date: Date) -> bool {
        (self.predicate)(date)
    }
}

/// Calendar that combines multiple calendars (joint holidays).
pub struct JointCalendar {
    calendars: Vec<Box<dyn Calendar>>,
}

impl JointCalendar {
    /// Creates a new joint calendar from multiple calendars.
    pub fn new(calendars: Vec<Box<dyn Calendar>>) -> Self {
        Self { calendars }
    }

    /// Names of the member calendars, joined with `" + "`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.calendars
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

impl Calendar for JointCalendar {
    fn name(&self) -> &'static str {
        "Joint Calendar"
    }

    fn is_business_day(&self, date: Date) -> bool {
        // Business day only if ALL calendars consider it a business day
        self.calendars.iter().all(|cal| cal.is_business_day(date))
    }
}
