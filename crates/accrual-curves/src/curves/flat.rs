//! Flat continuously compounded curve.

use serde::{Deserialize, Serialize};

use accrual_core::daycounts::DayCountConvention;
use accrual_core::Date;

use crate::error::{CurveError, CurveResult};
use crate::traits::DiscountCurve;

/// A curve with a single continuously compounded zero rate.
///
/// `DF(d) = exp(-r * t)` where `t` is the year fraction from the reference
/// date under the curve's day count (ACT/365F unless overridden).
///
/// # Example
///
/// ```rust
/// use accrual_core::Date;
/// use accrual_curves::prelude::*;
///
/// let today = Date::from_ymd(2025, 1, 15).unwrap();
/// let curve = FlatCurve::new(today, 0.03).unwrap();
/// let df = curve.discount_factor(today.add_days(365)).unwrap();
/// assert!((df - (-0.03_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FlatCurveData")]
pub struct FlatCurve {
    reference_date: Date,
    rate: f64,
    day_count: DayCountConvention,
}

/// Unchecked serialized form; converted through [`FlatCurve::new`].
#[derive(Deserialize)]
struct FlatCurveData {
    reference_date: Date,
    rate: f64,
    #[serde(default = "default_day_count")]
    day_count: DayCountConvention,
}

impl TryFrom<FlatCurveData> for FlatCurve {
    type Error = CurveError;

    fn try_from(data: FlatCurveData) -> CurveResult<Self> {
        FlatCurve::new(data.reference_date, data.rate)?.with_day_count(data.day_count)
    }
}

fn default_day_count() -> DayCountConvention {
    DayCountConvention::Act365Fixed
}

impl FlatCurve {
    /// Creates a flat curve on an ACT/365F time axis.
    pub fn new(reference_date: Date, rate: f64) -> CurveResult<Self> {
        if !rate.is_finite() {
            return Err(CurveError::invalid_parameter(format!(
                "flat rate must be finite, got {rate}"
            )));
        }
        Ok(Self {
            reference_date,
            rate,
            day_count: default_day_count(),
        })
    }

    /// Replaces the day count used to measure time.
    ///
    /// ACT/ACT ICMA is rejected: it needs a coupon period and cannot
    /// measure time from the reference date on its own.
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> CurveResult<Self> {
        if day_count == DayCountConvention::ActActIcma {
            return Err(CurveError::invalid_parameter(
                "ACT/ACT ICMA cannot be used as a curve time axis",
            ));
        }
        self.day_count = day_count;
        Ok(self)
    }

    /// Returns the continuously compounded rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the time-axis day count.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }
}

impl DiscountCurve for FlatCurve {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn discount_factor(&self, date: Date) -> CurveResult<f64> {
        if date <= self.reference_date {
            return Ok(1.0);
        }
        let t = self
            .day_count
            .to_day_count()
            .year_fraction(self.reference_date, date, None)?;
        Ok((-self.rate * t).exp())
    }
}
