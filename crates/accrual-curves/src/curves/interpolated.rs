//! Pillar-based discount curve with log-linear interpolation.

use accrual_core::daycounts::{Act365Fixed, DayCount};
use accrual_core::Date;

use crate::error::{CurveError, CurveResult};
use crate::traits::DiscountCurve;

/// Discount curve through a set of (date, discount factor) pillars.
///
/// Interpolation is linear in `ln(DF)` against ACT/365F time, which keeps
/// the instantaneous forward rate piecewise constant between pillars. Past
/// the last pillar the final segment's forward rate is extended.
///
/// # Example
///
/// ```rust
/// use accrual_core::Date;
/// use accrual_curves::prelude::*;
///
/// let today = Date::from_ymd(2025, 1, 15).unwrap();
/// let curve = InterpolatedDiscountCurveBuilder::new()
///     .reference_date(today)
///     .add_pillar(Date::from_ymd(2026, 1, 15).unwrap(), 0.97)
///     .add_pillar(Date::from_ymd(2030, 1, 15).unwrap(), 0.85)
///     .build()
///     .unwrap();
///
/// let df = curve.discount_factor(Date::from_ymd(2027, 1, 15).unwrap()).unwrap();
/// assert!(df < 0.97 && df > 0.85);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatedDiscountCurve {
    reference_date: Date,
    dates: Vec<Date>,
    discount_factors: Vec<f64>,
    /// Times from the reference date, with a leading 0.0 anchor.
    times: Vec<f64>,
    /// ln(DF) at each time, with a leading 0.0 anchor.
    log_dfs: Vec<f64>,
}

impl InterpolatedDiscountCurve {
    fn new(reference_date: Date, dates: Vec<Date>, discount_factors: Vec<f64>) -> CurveResult<Self> {
        if dates.is_empty() {
            return Err(CurveError::InsufficientPoints {
                required: 1,
                got: 0,
            });
        }

        let mut previous = reference_date;
        for (index, (&date, &df)) in dates.iter().zip(&discount_factors).enumerate() {
            if date <= previous {
                return Err(CurveError::NonMonotonicDates {
                    index,
                    previous,
                    current: date,
                });
            }
            if !df.is_finite() || df <= 0.0 || df > 1.0 {
                return Err(CurveError::InvalidDiscountFactor { date, value: df });
            }
            previous = date;
        }

        let mut times = Vec::with_capacity(dates.len() + 1);
        let mut log_dfs = Vec::with_capacity(dates.len() + 1);
        times.push(0.0);
        log_dfs.push(0.0);
        for (&date, &df) in dates.iter().zip(&discount_factors) {
            times.push(Act365Fixed.year_fraction(reference_date, date, None)?);
            log_dfs.push(df.ln());
        }

        log::debug!(
            "built interpolated discount curve: reference {reference_date}, {} pillars",
            dates.len()
        );

        Ok(Self {
            reference_date,
            dates,
            discount_factors,
            times,
            log_dfs,
        })
    }

    /// Returns the pillar dates.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the pillar discount factors.
    #[must_use]
    pub fn discount_factors(&self) -> &[f64] {
        &self.discount_factors
    }

    /// Returns the last pillar date.
    #[must_use]
    pub fn max_date(&self) -> Date {
        self.dates.last().copied().unwrap_or(self.reference_date)
    }

    fn log_discount_at(&self, t: f64) -> f64 {
        let n = self.times.len();
        // Segment index i such that times[i] <= t < times[i + 1]; clamp to
        // the last segment for extrapolation.
        let upper = self.times.partition_point(|&x| x <= t);
        let i = upper.saturating_sub(1).min(n - 2);

        let (t0, t1) = (self.times[i], self.times[i + 1]);
        let (y0, y1) = (self.log_dfs[i], self.log_dfs[i + 1]);
        y0 + (y1 - y0) * (t - t0) / (t1 - t0)
    }
}

impl DiscountCurve for InterpolatedDiscountCurve {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn discount_factor(&self, date: Date) -> CurveResult<f64> {
        if date <= self.reference_date {
            return Ok(1.0);
        }
        let t = Act365Fixed.year_fraction(self.reference_date, date, None)?;
        Ok(self.log_discount_at(t).exp())
    }
}

/// Builder for [`InterpolatedDiscountCurve`].
#[derive(Debug, Clone, Default)]
pub struct InterpolatedDiscountCurveBuilder {
    reference_date: Option<Date>,
    pillars: Vec<(Date, f64)>,
}

impl InterpolatedDiscountCurveBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reference (valuation) date.
    #[must_use]
    pub fn reference_date(mut self, date: Date) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Adds a discount factor pillar.
    #[must_use]
    pub fn add_pillar(mut self, date: Date, discount_factor: f64) -> Self {
        self.pillars.push((date, discount_factor));
        self
    }

    /// Adds multiple pillars.
    #[must_use]
    pub fn add_pillars(mut self, pillars: impl IntoIterator<Item = (Date, f64)>) -> Self {
        self.pillars.extend(pillars);
        self
    }

    /// Builds the curve.
    ///
    /// Pillars are sorted by date; duplicates and pillars on or before the
    /// reference date are rejected.
    pub fn build(mut self) -> CurveResult<InterpolatedDiscountCurve> {
        let reference_date = self
            .reference_date
            .ok_or(CurveError::MissingReferenceDate)?;

        self.pillars.sort_by_key(|(date, _)| *date);
        let (dates, dfs): (Vec<_>, Vec<_>) = self.pillars.into_iter().unzip();

        InterpolatedDiscountCurve::new(reference_date, dates, dfs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn sample_curve() -> InterpolatedDiscountCurve {
        InterpolatedDiscountCurveBuilder::new()
            .reference_date(d(2025, 1, 1))
            .add_pillar(d(2026, 1, 1), 0.96)
            .add_pillar(d(2028, 1, 1), 0.88)
            .build()
            .unwrap()
    }

    #[test]
    fn test_pillars_reprice_exactly() {
        let curve = sample_curve();
        assert_relative_eq!(curve.discount_factor(d(2026, 1, 1)).unwrap(), 0.96, epsilon = 1e-14);
        assert_relative_eq!(curve.discount_factor(d(2028, 1, 1)).unwrap(), 0.88, epsilon = 1e-14);
        assert_eq!(curve.discount_factor(d(2025, 1, 1)).unwrap(), 1.0);
    }

    #[test]
    fn test_log_linear_midpoint() {
        let curve = sample_curve();
        // Half-way in time between reference and first pillar
        let mid = d(2025, 1, 1).add_days(182);
        let t = 182.0 / 365.0;
        let expected = (0.96_f64.ln() * t).exp();
        assert_relative_eq!(curve.discount_factor(mid).unwrap(), expected, epsilon = 1e-14);
    }

    #[test]
    fn test_flat_forward_extrapolation() {
        let curve = sample_curve();
        let t1 = 365.0 / 365.0;
        let t2 = 1095.0 / 365.0;
        let fwd = (0.96_f64.ln() - 0.88_f64.ln()) / (t2 - t1);

        let far = d(2030, 1, 1);
        let t = 1826.0 / 365.0;
        let expected = (0.88_f64.ln() - fwd * (t - t2)).exp();
        assert_relative_eq!(curve.discount_factor(far).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_builder_sorts_pillars() {
        let curve = InterpolatedDiscountCurveBuilder::new()
            .reference_date(d(2025, 1, 1))
            .add_pillars([(d(2028, 1, 1), 0.88), (d(2026, 1, 1), 0.96)])
            .build()
            .unwrap();
        assert_eq!(curve.dates(), &[d(2026, 1, 1), d(2028, 1, 1)]);
        assert_eq!(curve.max_date(), d(2028, 1, 1));
    }

    #[test]
    fn test_validation() {
        let missing = InterpolatedDiscountCurveBuilder::new()
            .add_pillar(d(2026, 1, 1), 0.96)
            .build();
        assert_eq!(missing.unwrap_err(), CurveError::MissingReferenceDate);

        let empty = InterpolatedDiscountCurveBuilder::new()
            .reference_date(d(2025, 1, 1))
            .build();
        assert!(matches!(empty, Err(CurveError::InsufficientPoints { .. })));

        let duplicate = InterpolatedDiscountCurveBuilder::new()
            .reference_date(d(2025, 1, 1))
            .add_pillar(d(2026, 1, 1), 0.96)
            .add_pillar(d(2026, 1, 1), 0.95)
            .build();
        assert!(matches!(duplicate, Err(CurveError::NonMonotonicDates { index: 1, .. })));

        let on_reference = InterpolatedDiscountCurveBuilder::new()
            .reference_date(d(2025, 1, 1))
            .add_pillar(d(2025, 1, 1), 1.0)
            .build();
        assert!(matches!(on_reference, Err(CurveError::NonMonotonicDates { index: 0, .. })));

        let bad_df = InterpolatedDiscountCurveBuilder::new()
            .reference_date(d(2025, 1, 1))
            .add_pillar(d(2026, 1, 1), -0.5)
            .build();
        assert!(matches!(bad_df, Err(CurveError::InvalidDiscountFactor { .. })));
    }
}
