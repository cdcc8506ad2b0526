//! Day count conventions for coupon accrual.
//!
//! A day count convention turns a pair of dates into a fraction. Most
//! conventions are *single-sided*: the fraction is a share of a fixed-basis
//! year and depends only on the two dates. ACT/ACT ICMA is *period-relative*:
//! it measures the share of the current coupon period and needs that
//! period's end date to normalize.
//!
//! The orchestrating code never branches on the convention. It asks the
//! [`DayCount`] strategy for an [`Accrual`] (accrued share plus remaining
//! share of the current period) and for the fraction of a full coupon
//! period, and each implementation decides how its fraction converts into
//! coupon units.
//!
//! # Supported Conventions
//!
//! - [`Act360`]: Actual/360
//! - [`Act365Fixed`]: Actual/365 Fixed
//! - [`ActActIsda`]: Actual/Actual ISDA
//! - [`ActActIcma`]: Actual/Actual ICMA (period-relative)
//! - [`Thirty360US`]: 30/360 US (bond basis)
//! - [`Thirty360E`]: 30E/360 (Eurobond basis)
//!
//! # Usage
//!
//! ```rust
//! use accrual_core::daycounts::{Act360, DayCount};
//! use accrual_core::types::Date;
//!
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let end = Date::from_ymd(2025, 4, 1).unwrap();
//!
//! assert_eq!(Act360.year_fraction(start, end, None).unwrap(), 0.25);
//! ```

mod act360;
mod act365;
mod actact;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365Fixed;
pub use actact::{ActActIcma, ActActIsda};
pub use thirty360::{Thirty360E, Thirty360US};

use serde::{Deserialize, Serialize};

use crate::error::{normalize_tag, AccrualError, AccrualResult, ConventionParseError};
use crate::types::Date;

/// Accrual state of a coupon period at a given date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accrual {
    /// Fraction of the *annual* coupon accrued so far. Accrued interest is
    /// `factor * face * coupon`.
    pub factor: f64,
    /// Share of the period not yet accrued (`1 - accrued share`).
    pub remaining: f64,
}

/// Trait for day count conventions.
///
/// Implementations must be thread-safe and free of shared mutable state.
pub trait DayCount: Send + Sync {
    /// Returns the market name of the convention (e.g. "ACT/360").
    fn name(&self) -> &'static str;

    /// Returns the number of days between two dates under the convention.
    fn day_count(&self, start: Date, end: Date) -> i64;

    /// Calculates the fraction between `start` and `end`.
    ///
    /// Single-sided conventions ignore `period_end`. Period-relative
    /// conventions require it and return a fraction of the period
    /// `[start, period_end]`.
    ///
    /// # Errors
    ///
    /// Returns `AccrualError::InvalidDateOrder` if `end < start`, and
    /// `AccrualError::DayCountError` if a required period end is missing.
    fn year_fraction(&self, start: Date, end: Date, period_end: Option<Date>) -> AccrualResult<f64>;

    /// Accrual of the period `[previous_coupon, next_coupon]` as of
    /// `settlement`.
    fn accrual(
        &self,
        previous_coupon: Date,
        settlement: Date,
        _next_coupon: Date,
        _periods_per_year: u32,
    ) -> AccrualResult<Accrual> {
        let factor = self.year_fraction(previous_coupon, settlement, None)?;
        Ok(Accrual {
            factor,
            remaining: 1.0 - factor,
        })
    }

    /// Fraction of the annual coupon paid for the full period `[start, end]`.
    fn period_fraction(&self, start: Date, end: Date, _periods_per_year: u32) -> AccrualResult<f64> {
        self.year_fraction(start, end, None)
    }
}

/// Rejects reversed date pairs; shared by every convention.
pub(crate) fn ensure_ordered(start: Date, end: Date) -> AccrualResult<()> {
    if end < start {
        return Err(AccrualError::invalid_date_order(start, end));
    }
    Ok(())
}

/// Enumeration of all supported day count conventions.
///
/// ```rust
/// use accrual_core::daycounts::DayCountConvention;
/// use accrual_core::types::Date;
///
/// let dc = "ACT/365F".parse::<DayCountConvention>().unwrap().to_day_count();
/// let start = Date::from_ymd(2025, 1, 1).unwrap();
/// let end = Date::from_ymd(2026, 1, 1).unwrap();
/// assert_eq!(dc.year_fraction(start, end, None).unwrap(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DayCountConvention {
    /// Actual/360 - money market basis
    #[default]
    Act360,
    /// Actual/365 Fixed
    Act365Fixed,
    /// Actual/Actual ISDA - leap/non-leap year split
    ActActIsda,
    /// Actual/Actual ICMA - share of the coupon period
    ActActIcma,
    /// 30/360 US (bond basis) with February end-of-month rules
    Thirty360US,
    /// 30E/360 (Eurobond basis)
    Thirty360E,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation.
    #[must_use]
    pub fn to_day_count(&self) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::Act360 => Box::new(Act360),
            DayCountConvention::Act365Fixed => Box::new(Act365Fixed),
            DayCountConvention::ActActIsda => Box::new(ActActIsda),
            DayCountConvention::ActActIcma => Box::new(ActActIcma),
            DayCountConvention::Thirty360US => Box::new(Thirty360US),
            DayCountConvention::Thirty360E => Box::new(Thirty360E),
        }
    }

    /// Returns the market name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Act365Fixed => "ACT/365F",
            DayCountConvention::ActActIsda => "ACT/ACT ISDA",
            DayCountConvention::ActActIcma => "ACT/ACT ICMA",
            DayCountConvention::Thirty360US => "30/360 US",
            DayCountConvention::Thirty360E => "30E/360",
        }
    }

    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Act360,
            DayCountConvention::Act365Fixed,
            DayCountConvention::ActActIsda,
            DayCountConvention::ActActIcma,
            DayCountConvention::Thirty360US,
            DayCountConvention::Thirty360E,
        ]
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = ConventionParseError;

    /// Parses market spellings ("ACT/360", "30/360 US") as well as
    /// enum-style tags ("ACT_360", "ACT_ACT_ICMA", "THIRTY_360_BOND").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "ACT/360" | "ACTUAL/360" | "ACT 360" | "ACT360" => Ok(DayCountConvention::Act360),

            "ACT/365" | "ACT/365F" | "ACT/365 FIXED" | "ACTUAL/365" | "ACT 365 FIXED"
            | "ACT 365F" | "ACT365FIXED" => Ok(DayCountConvention::Act365Fixed),

            "ACT/ACT" | "ACT/ACT ISDA" | "ACTUAL/ACTUAL" | "ACT ACT ISDA" | "ACTACTISDA" => {
                Ok(DayCountConvention::ActActIsda)
            }

            "ACT/ACT ICMA" | "ACTUAL/ACTUAL ICMA" | "ACT ACT ICMA" | "ACTACTICMA" | "ISMA" => {
                Ok(DayCountConvention::ActActIcma)
            }

            "30/360" | "30/360 US" | "30U/360" | "BOND" | "THIRTY 360 BOND" | "THIRTY360US" => {
                Ok(DayCountConvention::Thirty360US)
            }

            "30E/360" | "EUROBOND" | "THIRTY E 360" | "THIRTY360E" => {
                Ok(DayCountConvention::Thirty360E)
            }

            _ => Err(ConventionParseError::new("day count convention", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_all_conventions_reject_reversed_dates() {
        let start = d(2025, 6, 15);
        let end = d(2025, 6, 1);
        for convention in DayCountConvention::all() {
            let dc = convention.to_day_count();
            let result = dc.year_fraction(start, end, Some(d(2025, 12, 15)));
            assert!(
                matches!(result, Err(AccrualError::InvalidDateOrder { .. })),
                "{convention} accepted reversed dates"
            );
        }
    }

    #[test]
    fn test_all_conventions_roughly_half_year() {
        let start = d(2025, 1, 1);
        let end = d(2025, 7, 1);
        for convention in DayCountConvention::all() {
            let dc = convention.to_day_count();
            let yf = dc.period_fraction(start, end, 2).unwrap();
            assert!(yf > 0.45 && yf < 0.55, "{convention}: {yf}");
        }
    }

    #[test]
    fn test_single_sided_accrual_sums_to_one() {
        let dc = Act360;
        let accrual = dc.accrual(d(2025, 1, 15), d(2025, 4, 15), d(2025, 7, 15), 2).unwrap();
        assert_relative_eq!(accrual.factor, 0.25);
        assert_relative_eq!(accrual.factor + accrual.remaining, 1.0);
    }

    #[test]
    fn test_convention_names() {
        assert_eq!(DayCountConvention::Act360.name(), "ACT/360");
        assert_eq!(DayCountConvention::ActActIcma.name(), "ACT/ACT ICMA");
        assert_eq!(format!("{}", DayCountConvention::Thirty360US), "30/360 US");
    }

    #[test]
    fn test_from_str_enum_style_tags() {
        assert_eq!("ACT_360".parse::<DayCountConvention>().unwrap(), DayCountConvention::Act360);
        assert_eq!(
            "ACT_ACT_ICMA".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::ActActIcma
        );
        assert_eq!(
            "ACT_365_FIXED".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act365Fixed
        );
        assert_eq!(
            "THIRTY_360_BOND".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Thirty360US
        );
        assert_eq!(
            "thirty_e_360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Thirty360E
        );
    }

    #[test]
    fn test_from_str_invalid() {
        let err = "BUS/252".parse::<DayCountConvention>().unwrap_err();
        assert_eq!(err.kind, "day count convention");
        assert!(err.to_string().contains("BUS/252"));
    }

    #[test]
    fn test_from_str_roundtrip() {
        for convention in DayCountConvention::all() {
            let parsed: DayCountConvention = convention.name().parse().unwrap();
            assert_eq!(*convention, parsed);
        }
    }
}
