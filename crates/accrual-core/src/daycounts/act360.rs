//! Actual/360 day count convention.

use super::{ensure_ordered, DayCount};
use crate::error::AccrualResult;
use crate::types::Date;

/// Actual/360 day count convention.
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{360}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn year_fraction(&self, start: Date, end: Date, _period_end: Option<Date>) -> AccrualResult<f64> {
        ensure_ordered(start, end)?;
        Ok(self.day_count(start, end) as f64 / 360.0)
    }
}
