//! Actual/Actual day count conventions.

use super::{ensure_ordered, Accrual, DayCount};
use crate::error::{AccrualError, AccrualResult};
use crate::types::Date;

/// Actual/Actual ISDA day count convention.
///
/// Splits the interval by calendar year:
///
/// $$\text{Year Fraction} = \frac{\text{Days in non-leap years}}{365} + \frac{\text{Days in leap years}}{366}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT ISDA"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn year_fraction(&self, start: Date, end: Date, _period_end: Option<Date>) -> AccrualResult<f64> {
        ensure_ordered(start, end)?;

        let mut total = 0.0;
        let mut current = start;

        while current.year() < end.year() {
            let next_year = Date::from_ymd(current.year() + 1, 1, 1)?;
            total += current.days_between(&next_year) as f64 / f64::from(current.days_in_year());
            current = next_year;
        }

        total += current.days_between(&end) as f64 / f64::from(current.days_in_year());
        Ok(total)
    }
}

/// Actual/Actual ICMA day count convention.
///
/// Period-relative: the fraction is the share of the coupon period
/// `[start, period_end]` elapsed by `end`,
///
/// $$f = \frac{\text{end} - \text{start}}{\text{period\_end} - \text{start}}$$
///
/// A full period therefore has `f = 1`, and converting to annual coupon
/// units divides by the number of periods per year. That conversion lives in
/// [`DayCount::accrual`] and [`DayCount::period_fraction`]; other
/// conventions must not apply it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIcma;

impl DayCount for ActActIcma {
    fn name(&self) -> &'static str {
        "ACT/ACT ICMA"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn year_fraction(&self, start: Date, end: Date, period_end: Option<Date>) -> AccrualResult<f64> {
        ensure_ordered(start, end)?;

        let period_end = period_end
            .ok_or_else(|| AccrualError::day_count("ACT/ACT ICMA requires the coupon period end"))?;
        let days_in_period = start.days_between(&period_end);
        if days_in_period <= 0 {
            return Err(AccrualError::day_count(format!(
                "ACT/ACT ICMA period {start} to {period_end} has no length"
            )));
        }

        Ok(start.days_between(&end) as f64 / days_in_period as f64)
    }

    fn accrual(
        &self,
        previous_coupon: Date,
        settlement: Date,
        next_coupon: Date,
        periods_per_year: u32,
    ) -> AccrualResult<Accrual> {
        let share = self.year_fraction(previous_coupon, settlement, Some(next_coupon))?;
        Ok(Accrual {
            factor: share / f64::from(require_frequency(periods_per_year)?),
            remaining: 1.0 - share,
        })
    }

    fn period_fraction(&self, start: Date, end: Date, periods_per_year: u32) -> AccrualResult<f64> {
        let share = self.year_fraction(start, end, Some(end))?;
        Ok(share / f64::from(require_frequency(periods_per_year)?))
    }
}

fn require_frequency(periods_per_year: u32) -> AccrualResult<u32> {
    if periods_per_year == 0 {
        return Err(AccrualError::day_count(
            "ACT/ACT ICMA requires a coupon frequency",
        ));
    }
    Ok(periods_per_year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_actact_isda_full_years() {
        assert_eq!(ActActIsda.year_fraction(d(2025, 1, 1), d(2026, 1, 1), None).unwrap(), 1.0);
        assert_eq!(ActActIsda.year_fraction(d(2024, 1, 1), d(2025, 1, 1), None).unwrap(), 1.0);
    }

    #[test]
    fn test_actact_isda_cross_year() {
        // 184 days in 2024 (leap) + 181 days in 2025
        let yf = ActActIsda.year_fraction(d(2024, 7, 1), d(2025, 7, 1), None).unwrap();
        assert_relative_eq!(yf, 184.0 / 366.0 + 181.0 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn test_icma_requires_period_end() {
        let result = ActActIcma.year_fraction(d(2025, 1, 15), d(2025, 3, 15), None);
        assert!(matches!(result, Err(AccrualError::DayCountError { .. })));
    }

    #[test]
    fn test_icma_half_period() {
        // 2024-01-01 to 2024-07-01 is 182 days; 2024-04-01 is 91 days in
        let share = ActActIcma
            .year_fraction(d(2024, 1, 1), d(2024, 4, 1), Some(d(2024, 7, 1)))
            .unwrap();
        assert_eq!(share, 0.5);
    }

    #[test]
    fn test_icma_accrual_divides_by_frequency() {
        let accrual = ActActIcma.accrual(d(2024, 1, 1), d(2024, 4, 1), d(2024, 7, 1), 2).unwrap();
        assert_eq!(accrual.factor, 0.25);
        assert_eq!(accrual.remaining, 0.5);
    }

    #[test]
    fn test_icma_full_period_fraction() {
        let yf = ActActIcma.period_fraction(d(2025, 1, 15), d(2025, 4, 15), 4).unwrap();
        assert_eq!(yf, 0.25);
    }

    #[test]
    fn test_icma_zero_length_period() {
        let date = d(2025, 1, 15);
        assert!(ActActIcma.year_fraction(date, date, Some(date)).is_err());
        assert!(ActActIcma.period_fraction(date, date, 2).is_err());
    }

    #[test]
    fn test_icma_zero_frequency() {
        let result = ActActIcma.accrual(d(2024, 1, 1), d(2024, 4, 1), d(2024, 7, 1), 0);
        assert!(result.is_err());
    }
}
