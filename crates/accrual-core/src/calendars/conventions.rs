//! Business day adjustment conventions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::Calendar;
use crate::error::{normalize_tag, AccrualError, AccrualResult, ConventionParseError};
use crate::types::Date;

/// Upper bound on consecutive non-business days before giving up.
const MAX_ROLL_DAYS: i64 = 366;

/// Business day adjustment conventions.
///
/// These conventions specify how to adjust a date that falls
/// on a non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BusinessDayConvention {
    /// No adjustment - use the date as-is even if not a business day.
    Unadjusted,

    /// Move to the following business day.
    #[default]
    Following,

    /// Move to the following business day, unless it crosses a month boundary,
    /// in which case move to the preceding business day.
    ModifiedFollowing,

    /// Move to the preceding business day.
    Preceding,

    /// Move to the preceding business day, unless it crosses a month boundary,
    /// in which case move to the following business day.
    ModifiedPreceding,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
        };
        write!(f, "{name}")
    }
}

impl FromStr for BusinessDayConvention {
    type Err = ConventionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "NONE" | "UNADJUSTED" => Ok(BusinessDayConvention::Unadjusted),
            "FOLLOWING" | "F" => Ok(BusinessDayConvention::Following),
            "MODIFIED FOLLOWING" | "MF" => Ok(BusinessDayConvention::ModifiedFollowing),
            "PRECEDING" | "P" => Ok(BusinessDayConvention::Preceding),
            "MODIFIED PRECEDING" | "MP" => Ok(BusinessDayConvention::ModifiedPreceding),
            _ => Err(ConventionParseError::new("business day convention", s)),
        }
    }
}

/// Adjusts a date according to the given business day convention.
pub fn adjust<C: Calendar + ?Sized>(
    date: Date,
    convention: BusinessDayConvention,
    calendar: &C,
) -> AccrualResult<Date> {
    if convention == BusinessDayConvention::Unadjusted || calendar.is_business_day(date) {
        return Ok(date);
    }

    match convention {
        BusinessDayConvention::Unadjusted => Ok(date),
        BusinessDayConvention::Following => roll(date, 1, calendar),
        BusinessDayConvention::Preceding => roll(date, -1, calendar),
        BusinessDayConvention::ModifiedFollowing => {
            let adjusted = roll(date, 1, calendar)?;
            if adjusted.month() == date.month() {
                Ok(adjusted)
            } else {
                roll(date, -1, calendar)
            }
        }
        BusinessDayConvention::ModifiedPreceding => {
            let adjusted = roll(date, -1, calendar)?;
            if adjusted.month() == date.month() {
                Ok(adjusted)
            } else {
                roll(date, 1, calendar)
            }
        }
    }
}

/// Steps one day at a time in `direction` until a business day is reached.
fn roll<C: Calendar + ?Sized>(date: Date, direction: i64, calendar: &C) -> AccrualResult<Date> {
    let mut current = date;
    for _ in 0..MAX_ROLL_DAYS {
        if calendar.is_business_day(current) {
            log::trace!("rolled {date} to {current} on calendar '{}'", calendar.name());
            return Ok(current);
        }
        current = current.add_days(direction);
    }
    Err(AccrualError::calendar(format!(
        "no business day within {MAX_ROLL_DAYS} days of {date} on calendar '{}'",
        calendar.name()
    )))
}
