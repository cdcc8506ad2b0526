//! Error types for annuity operations.

use accrual_core::{AccrualError, ConventionParseError, Date};
use accrual_curves::CurveError;
use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during annuity construction and valuation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// A convention tag is not a member of its enumeration.
    #[error("Invalid convention: unknown {kind} '{value}'")]
    InvalidConvention {
        /// Which convention was being parsed.
        kind: String,
        /// The rejected tag.
        value: String,
    },

    /// Settlement coincides with maturity.
    #[error("Invalid settlement {settlement}: coincides with maturity {maturity}")]
    InvalidSettlement {
        /// Settlement date.
        settlement: Date,
        /// Maturity date.
        maturity: Date,
    },

    /// The schedule did not bracket settlement with two coupon dates.
    #[error("Insufficient flows: schedule produced {count} date(s), need at least 2")]
    InsufficientFlows {
        /// Number of dates produced.
        count: usize,
    },

    /// Bond terms are out of range.
    #[error("Invalid terms: {reason}")]
    InvalidTerms {
        /// Description of what's invalid.
        reason: String,
    },

    /// Schedule generation failed.
    #[error("Invalid schedule: {message}")]
    InvalidSchedule {
        /// Description of the failure.
        message: String,
    },

    /// Configuration could not be read.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the failure.
        reason: String,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] AccrualError),

    /// Curve error.
    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),
}

impl BondError {
    /// Creates an invalid terms error.
    #[must_use]
    pub fn invalid_terms(reason: impl Into<String>) -> Self {
        Self::InvalidTerms {
            reason: reason.into(),
        }
    }

    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(message: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

impl From<ConventionParseError> for BondError {
    fn from(err: ConventionParseError) -> Self {
        Self::InvalidConvention {
            kind: err.kind.to_string(),
            value: err.value,
        }
    }
}

impl From<serde_json::Error> for BondError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(err.to_string())
    }
}
