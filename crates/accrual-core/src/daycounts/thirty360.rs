//! 30/360 day count conventions.
//!
//! Both variants count every month as 30 days and every year as 360 days;
//! they differ only in how the day-of-month components are clamped.

use super::{ensure_ordered, DayCount};
use crate::error::AccrualResult;
use crate::types::Date;

/// 30/360 US (bond basis), including the February end-of-month rules.
///
/// - If D1 is the last day of February, D1 = 30; else if D1 = 31, D1 = 30.
/// - If D2 is the last day of February and D1 was too, D2 = 30.
/// - Else if D2 = 31 and D1 >= 30, D2 = 30.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360US;

impl DayCount for Thirty360US {
    fn name(&self) -> &'static str {
        "30/360 US"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let mut d1 = i64::from(start.day());
        let mut d2 = i64::from(end.day());

        let d1_feb_eom = is_last_day_of_february(start);
        if d1_feb_eom || d1 == 31 {
            d1 = 30;
        }

        if d1_feb_eom && is_last_day_of_february(end) {
            d2 = 30;
        } else if d2 == 31 && d1 >= 30 {
            d2 = 30;
        }

        thirty_360_days(start, end, d1, d2)
    }

    fn year_fraction(&self, start: Date, end: Date, _period_end: Option<Date>) -> AccrualResult<f64> {
        ensure_ordered(start, end)?;
        Ok(self.day_count(start, end) as f64 / 360.0)
    }
}

/// 30E/360 (Eurobond basis): any 31st becomes the 30th.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360E;

impl DayCount for Thirty360E {
    fn name(&self) -> &'static str {
        "30E/360"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let d1 = i64::from(start.day().min(30));
        let d2 = i64::from(end.day().min(30));
        thirty_360_days(start, end, d1, d2)
    }

    fn year_fraction(&self, start: Date, end: Date, _period_end: Option<Date>) -> AccrualResult<f64> {
        ensure_ordered(start, end)?;
        Ok(self.day_count(start, end) as f64 / 360.0)
    }
}

fn thirty_360_days(start: Date, end: Date, d1: i64, d2: i64) -> i64 {
    let years = i64::from(end.year() - start.year());
    let months = i64::from(end.month()) - i64::from(start.month());
    360 * years + 30 * months + (d2 - d1)
}

fn is_last_day_of_february(date: Date) -> bool {
    date.month() == 2 && date.is_end_of_month()
}
