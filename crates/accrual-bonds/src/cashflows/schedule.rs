//! Coupon date schedule generation.
//!
//! Dates are stepped a whole number of coupon periods from a single anchor
//! (maturity for [`DateGenRule::Backward`], the start date for
//! [`DateGenRule::Forward`]). Each date is measured from the anchor rather
//! than from its neighbour, so day-of-month clamping in short months does
//! not drift through the schedule.
//!
//! # Example
//!
//! ```rust
//! use accrual_bonds::cashflows::{Schedule, ScheduleConfig};
//! use accrual_core::types::{Date, Frequency};
//!
//! let config = ScheduleConfig::new(
//!     Date::from_ymd(2025, 3, 1).unwrap(),
//!     Date::from_ymd(2026, 7, 15).unwrap(),
//!     Frequency::SemiAnnual,
//! );
//!
//! let schedule = Schedule::generate(config).unwrap();
//! // The first date is the coupon date on or before the start.
//! assert_eq!(schedule.dates()[0], Date::from_ymd(2025, 1, 15).unwrap());
//! assert_eq!(schedule.num_periods(), 3);
//! ```

use accrual_core::calendars::{BusinessDayConvention, CalendarType};
use accrual_core::types::{Date, DateGenRule, Frequency};

use crate::error::{BondError, BondResult};

/// Configuration for schedule generation.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Start date (settlement or issue)
    pub start_date: Date,
    /// End date (maturity)
    pub end_date: Date,
    /// Payment frequency
    pub frequency: Frequency,
    /// Calendar for business day adjustments
    pub calendar: CalendarType,
    /// Business day adjustment convention
    pub business_day_convention: BusinessDayConvention,
    /// Direction of generation
    pub date_gen_rule: DateGenRule,
    /// Roll generated dates to month-end when the anchor is a month-end
    pub end_of_month: bool,
}

impl ScheduleConfig {
    /// Creates an unadjusted, backward-generated configuration.
    #[must_use]
    pub fn new(start_date: Date, end_date: Date, frequency: Frequency) -> Self {
        Self {
            start_date,
            end_date,
            frequency,
            calendar: CalendarType::None,
            business_day_convention: BusinessDayConvention::Unadjusted,
            date_gen_rule: DateGenRule::Backward,
            end_of_month: false,
        }
    }

    /// Sets the calendar for business day adjustments.
    #[must_use]
    pub fn with_calendar(mut self, calendar: CalendarType) -> Self {
        self.calendar = calendar;
        self
    }

    /// Sets the business day convention.
    #[must_use]
    pub fn with_business_day_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.business_day_convention = convention;
        self
    }

    /// Sets the date generation rule.
    #[must_use]
    pub fn with_date_gen_rule(mut self, rule: DateGenRule) -> Self {
        self.date_gen_rule = rule;
        self
    }

    /// Sets the end-of-month rule.
    #[must_use]
    pub fn with_end_of_month(mut self, eom: bool) -> Self {
        self.end_of_month = eom;
        self
    }
}

/// A date schedule for coupon payments.
///
/// Holds both the unadjusted dates and the dates rolled with the configured
/// calendar. A schedule with a single date is degenerate (start on or after
/// end) and has no periods.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    unadjusted_dates: Vec<Date>,
    adjusted_dates: Vec<Date>,
    calendar: CalendarType,
    convention: BusinessDayConvention,
}

impl Schedule {
    /// Generates a schedule from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidSchedule` if date arithmetic leaves the
    /// supported range or a date cannot be rolled to a business day.
    pub fn generate(config: ScheduleConfig) -> BondResult<Self> {
        let months_per_period = config.frequency.months_per_period() as i32;

        let unadjusted = match config.date_gen_rule {
            DateGenRule::Backward => Self::generate_backward(&config, months_per_period)?,
            DateGenRule::Forward => Self::generate_forward(&config, months_per_period)?,
        };

        let adjusted = Self::adjust_dates(&unadjusted, &config)?;

        log::trace!(
            "generated {} schedule dates from {} to {} ({})",
            unadjusted.len(),
            config.start_date,
            config.end_date,
            config.frequency
        );

        Ok(Self {
            unadjusted_dates: unadjusted,
            adjusted_dates: adjusted,
            calendar: config.calendar,
            convention: config.business_day_convention,
        })
    }

    /// Steps back from the end date; the first date on or before the start
    /// closes the schedule as the previous coupon date.
    fn generate_backward(config: &ScheduleConfig, months_per_period: i32) -> BondResult<Vec<Date>> {
        let anchor = config.end_date;
        let mut dates = Vec::new();
        let mut current = anchor;
        let mut periods = 0;

        while current > config.start_date {
            dates.push(current);
            periods += 1;
            current = Self::step(config, anchor, -periods * months_per_period)?;
        }

        dates.push(current);
        dates.reverse();
        Ok(dates)
    }

    /// Steps forward from the start date and closes with the end date.
    fn generate_forward(config: &ScheduleConfig, months_per_period: i32) -> BondResult<Vec<Date>> {
        let anchor = config.start_date;
        let mut dates = vec![anchor];
        if anchor >= config.end_date {
            return Ok(dates);
        }

        let mut periods = 1;
        loop {
            let current = Self::step(config, anchor, periods * months_per_period)?;
            if current >= config.end_date {
                break;
            }
            dates.push(current);
            periods += 1;
        }

        dates.push(config.end_date);
        Ok(dates)
    }

    fn step(config: &ScheduleConfig, anchor: Date, months: i32) -> BondResult<Date> {
        let date = anchor
            .add_months(months)
            .map_err(|e| BondError::invalid_schedule(format!("cannot step {months} months from {anchor}: {e}")))?;

        if config.end_of_month && anchor.is_end_of_month() {
            Ok(date.end_of_month())
        } else {
            Ok(date)
        }
    }

    /// Adjusts dates for business days using the configured calendar.
    fn adjust_dates(dates: &[Date], config: &ScheduleConfig) -> BondResult<Vec<Date>> {
        if config.business_day_convention == BusinessDayConvention::Unadjusted {
            return Ok(dates.to_vec());
        }

        let calendar = config.calendar.to_calendar();
        dates
            .iter()
            .map(|&date| {
                calendar
                    .adjust(date, config.business_day_convention)
                    .map_err(|e| BondError::invalid_schedule(format!("Failed to adjust date {date}: {e}")))
            })
            .collect()
    }

    /// Returns the unadjusted schedule dates.
    #[must_use]
    pub fn unadjusted_dates(&self) -> &[Date] {
        &self.unadjusted_dates
    }

    /// Returns the adjusted schedule dates (for payment).
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.adjusted_dates
    }

    /// Consumes the schedule, returning the adjusted dates.
    #[must_use]
    pub fn into_dates(self) -> Vec<Date> {
        self.adjusted_dates
    }

    /// Returns an iterator over the coupon periods (start, end) using adjusted dates.
    pub fn periods(&self) -> impl Iterator<Item = (Date, Date)> + '_ {
        self.adjusted_dates.windows(2).map(|w| (w[0], w[1]))
    }

    /// Returns an iterator over the coupon periods using unadjusted dates.
    pub fn unadjusted_periods(&self) -> impl Iterator<Item = (Date, Date)> + '_ {
        self.unadjusted_dates.windows(2).map(|w| (w[0], w[1]))
    }

    /// Returns the number of periods in the schedule.
    #[must_use]
    pub fn num_periods(&self) -> usize {
        self.adjusted_dates.len().saturating_sub(1)
    }

    /// Returns true if the schedule has no periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjusted_dates.len() < 2
    }

    /// Returns the calendar used for this schedule.
    #[must_use]
    pub fn calendar(&self) -> CalendarType {
        self.calendar
    }

    /// Returns the business day convention used.
    #[must_use]
    pub fn convention(&self) -> BusinessDayConvention {
        self.convention
    }
}
