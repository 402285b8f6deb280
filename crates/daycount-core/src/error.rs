//! Error types for the day count library.
//!
//! Year fraction and business-day calculations are total functions and never
//! fail. Errors only arise at the boundaries: building a [`Date`](crate::types::Date)
//! from invalid components, parsing a convention name, or decoding a
//! convention from structured data.

use thiserror::Error;

/// A specialized Result type for day count operations.
pub type DayCountResult<T> = Result<T, DayCountError>;

/// The main error type for day count operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DayCountError {
    /// The text does not name one of the supported conventions.
    #[error("unrecognized day count convention: '{input}'")]
    UnrecognizedConvention {
        /// The text that failed to parse.
        input: String,
    },

    /// Structured input whose convention field is not a string.
    #[error("malformed convention input: {reason}")]
    MalformedInput {
        /// Description of what was found instead.
        reason: String,
    },

    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },
}

impl DayCountError {
    /// Creates an unrecognized convention error.
    #[must_use]
    pub fn unrecognized_convention(input: impl Into<String>) -> Self {
        Self::UnrecognizedConvention {
            input: input.into(),
        }
    }

    /// Creates a malformed input error.
    #[must_use]
    pub fn malformed_input(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DayCountError::invalid_date("2024-02-30");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_unrecognized_convention_names_input() {
        let err = DayCountError::unrecognized_convention("Act/Whatever");
        assert_eq!(
            err.to_string(),
            "unrecognized day count convention: 'Act/Whatever'"
        );
    }

    #[test]
    fn test_malformed_input() {
        let err = DayCountError::malformed_input("expected a string, found 0.01");
        assert!(err.to_string().starts_with("malformed convention input"));
    }
}
