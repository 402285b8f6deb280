//! # Daycount Core
//!
//! Financial day count conventions: year fractions and business-day counts
//! between two calendar dates.
//!
//! This crate provides:
//!
//! - **Day Count Conventions**: Actual/Actual, Actual/Actual AFB, Actual/360,
//!   Actual/365 Fixed and the US, European, Italian and German 30/360 variants
//! - **Dispatch**: a closed [`Convention`] enum mapped to its algorithm, with
//!   integer codes outside the enum falling back to Actual/Actual
//! - **Business Days**: enumeration and counting of business days under a
//!   caller-supplied [`Calendar`]
//! - **Types**: the [`Date`] newtype the conventions operate on
//!
//! ## Design Philosophy
//!
//! - **Pure Functions**: no I/O, no shared mutable state, safe to call from
//!   any thread
//! - **Total Functions**: year fractions never fail; only parsing does
//! - **Antisymmetry**: `f(a, b) == -f(b, a)` and `f(d, d) == 0` for every
//!   convention
//!
//! ## Example
//!
//! ```rust
//! use daycount_core::prelude::*;
//!
//! let from = Date::from_ymd(2007, 12, 28).unwrap();
//! let to = Date::from_ymd(2008, 2, 29).unwrap();
//!
//! let convention: Convention = "ActualActualAFB".parse().unwrap();
//! assert_eq!(year_fraction(from, to, convention), 63.0 / 365.0);
//!
//! let start = Date::from_ymd(2020, 1, 1).unwrap();
//! let end = Date::from_ymd(2020, 1, 10).unwrap();
//! assert_eq!(business_days_between(start, end), 7);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::similar_names)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

#[cfg(test)]
mod validation_tests;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        business_days_between, business_days_between_with, business_times, business_times_with,
        Calendar, FnCalendar, WeekendCalendar,
    };
    pub use crate::daycounts::{
        convention_name, year_fraction, year_fraction_for_code, Convention, DayCount,
    };
    pub use crate::error::{DayCountError, DayCountResult};
    pub use crate::types::Date;
}

// Re-export commonly used types at crate root
pub use calendars::Calendar;
pub use daycounts::{year_fraction, Convention, DayCount};
pub use error::{DayCountError, DayCountResult};
pub use types::Date;
