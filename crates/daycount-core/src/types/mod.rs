//! Value types shared by the day count conventions and calendars.

mod date;

pub use date::Date;
