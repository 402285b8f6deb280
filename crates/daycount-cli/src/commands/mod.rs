//! CLI command implementations.

pub mod business_days;
pub mod config;
pub mod conventions;
pub mod year_fraction;

// Re-export submodules for convenience
pub use business_days::BusinessDaysArgs;
pub use config::ConfigArgs;
pub use year_fraction::YearFractionArgs;

use daycount_core::types::Date;

use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}
