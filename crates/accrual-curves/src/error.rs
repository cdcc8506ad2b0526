//! Error types for curve operations.

use accrual_core::{AccrualError, Date};
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve construction and evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// A discount factor outside (0, 1] or not finite.
    #[error("Invalid discount factor {value} at {date}")]
    InvalidDiscountFactor {
        /// Pillar date of the offending factor.
        date: Date,
        /// The rejected value.
        value: f64,
    },

    /// Not enough pillars to build the curve.
    #[error("Insufficient points: need at least {required}, got {got}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        got: usize,
    },

    /// Pillar dates are not strictly increasing after the reference date.
    #[error("Non-monotonic pillar dates at index {index}: {previous} >= {current}")]
    NonMonotonicDates {
        /// Index where the violation occurred.
        index: usize,
        /// Previous date (or the reference date for index 0).
        previous: Date,
        /// Offending date.
        current: Date,
    },

    /// Builder was finalized without a reference date.
    #[error("Missing reference date")]
    MissingReferenceDate,

    /// A curve parameter is out of range.
    #[error("Invalid curve parameter: {reason}")]
    InvalidParameter {
        /// Description of the problem.
        reason: String,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] AccrualError),
}

impl CurveError {
    /// Creates an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }
}
