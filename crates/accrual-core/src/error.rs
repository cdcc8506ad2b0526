//! Error types for the core crate.
//!
//! Date construction, day count fractions and calendar adjustments all
//! report failures through [`AccrualError`]. Convention tags that cannot be
//! parsed produce a [`ConventionParseError`], which callers lift into their
//! own domain error.

use thiserror::Error;

use crate::types::Date;

/// A specialized Result type for core operations.
pub type AccrualResult<T> = Result<T, AccrualError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccrualError {
    /// Error in date construction or arithmetic.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Day count inputs out of order.
    #[error("Invalid date order: end {end} is before start {start}")]
    InvalidDateOrder {
        /// Accrual start date.
        start: Date,
        /// Accrual end date.
        end: Date,
    },

    /// Day count calculation error.
    #[error("Day count error: {reason}")]
    DayCountError {
        /// Description of the error.
        reason: String,
    },

    /// Calendar or business day error.
    #[error("Calendar error: {reason}")]
    CalendarError {
        /// Description of the error.
        reason: String,
    },
}

impl AccrualError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid date order error.
    #[must_use]
    pub fn invalid_date_order(start: Date, end: Date) -> Self {
        Self::InvalidDateOrder { start, end }
    }

    /// Creates a day count error.
    #[must_use]
    pub fn day_count(reason: impl Into<String>) -> Self {
        Self::DayCountError {
            reason: reason.into(),
        }
    }

    /// Creates a calendar error.
    #[must_use]
    pub fn calendar(reason: impl Into<String>) -> Self {
        Self::CalendarError {
            reason: reason.into(),
        }
    }
}

/// Error returned when a convention tag is not a member of its enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: '{value}'")]
pub struct ConventionParseError {
    /// Which enumeration was being parsed (e.g. "frequency").
    pub kind: &'static str,
    /// The rejected tag.
    pub value: String,
}

impl ConventionParseError {
    /// Creates a parse error for the given enumeration kind.
    #[must_use]
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Normalizes a convention tag for matching: trims, uppercases and maps
/// `-`, `_` and whitespace runs to a single space.
pub(crate) fn normalize_tag(s: &str) -> String {
    s.trim()
        .to_uppercase()
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AccrualError::invalid_date("2024-02-30");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_date_order_display() {
        let start = Date::from_ymd(2025, 6, 1).unwrap();
        let end = Date::from_ymd(2025, 5, 1).unwrap();
        let err = AccrualError::invalid_date_order(start, end);
        assert_eq!(
            err.to_string(),
            "Invalid date order: end 2025-05-01 is before start 2025-06-01"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let err = ConventionParseError::new("frequency", "FORTNIGHTLY");
        assert_eq!(err.to_string(), "unknown frequency: 'FORTNIGHTLY'");
    }

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag(" semi_annual "), "SEMI ANNUAL");
        assert_eq!(normalize_tag("Semi-Annual"), "SEMI ANNUAL");
        assert_eq!(normalize_tag("ACT/ACT  ICMA"), "ACT/ACT ICMA");
    }
}
