//! Business day calendars and conventions.
//!
//! Holiday data is supplied by the surrounding system through the
//! [`Calendar`] trait. This crate ships the two calendars every schedule
//! needs: [`NullCalendar`] (no adjustment at all) and [`WeekendCalendar`].

mod conventions;

pub use conventions::BusinessDayConvention;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{normalize_tag, AccrualResult, ConventionParseError};
use crate::types::Date;

/// Trait for business day calendars.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> AccrualResult<Date> {
        conventions::adjust(date, convention, self)
    }
}

/// Calendar on which every day is a business day.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl Calendar for NullCalendar {
    fn name(&self) -> &'static str {
        "None"
    }

    fn is_business_day(&self, _date: Date) -> bool {
        true
    }
}

/// Weekend-only calendar (no holidays).
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekend"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}

/// Calendar selector stored on bond terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CalendarType {
    /// No business day adjustment.
    None,
    /// Saturdays and Sundays are holidays.
    #[default]
    Weekend,
}

impl CalendarType {
    /// Returns the calendar implementation for this selector.
    #[must_use]
    pub fn to_calendar(&self) -> Box<dyn Calendar> {
        match self {
            CalendarType::None => Box::new(NullCalendar),
            CalendarType::Weekend => Box::new(WeekendCalendar),
        }
    }
}

impl fmt::Display for CalendarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarType::None => write!(f, "None"),
            CalendarType::Weekend => write!(f, "Weekend"),
        }
    }
}

impl FromStr for CalendarType {
    type Err = ConventionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "NONE" => Ok(CalendarType::None),
            "WEEKEND" | "WEEKEND ONLY" => Ok(CalendarType::Weekend),
            _ => Err(ConventionParseError::new("calendar", s)),
        }
    }
}
