//! Actual/365 Fixed day count convention.

use super::{ensure_ordered, DayCount};
use crate::error::AccrualResult;
use crate::types::Date;

/// Actual/365 Fixed day count convention.
///
/// The denominator is always 365, leap years included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn year_fraction(&self, start: Date, end: Date, _period_end: Option<Date>) -> AccrualResult<f64> {
        ensure_ordered(start, end)?;
        Ok(self.day_count(start, end) as f64 / 365.0)
    }
}
