//! Contractual terms of an annuity.

use serde::{Deserialize, Serialize};

use accrual_core::calendars::{BusinessDayConvention, CalendarType};
use accrual_core::daycounts::DayCountConvention;
use accrual_core::types::{Date, DateGenRule, Frequency};

use crate::error::{BondError, BondResult};

/// Immutable description of a fixed-rate annuity.
///
/// `coupon` is an annual decimal rate (0.05 = 5%). The calendar,
/// business-day and date-generation settings describe the instrument;
/// valuation always generates an unadjusted backward schedule from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondTerms {
    /// Final coupon date.
    pub maturity: Date,
    /// Annual coupon rate as a decimal.
    pub coupon: f64,
    /// Coupon frequency.
    pub frequency: Frequency,
    /// Holiday calendar.
    #[serde(default)]
    pub calendar: CalendarType,
    /// Business day adjustment rule.
    #[serde(default)]
    pub business_day_convention: BusinessDayConvention,
    /// Schedule generation direction.
    #[serde(default)]
    pub date_gen_rule: DateGenRule,
    /// Accrual day count.
    #[serde(default)]
    pub day_count: DayCountConvention,
    /// Face (notional) amount.
    #[serde(default = "default_face_value")]
    pub face_value: f64,
}

pub(crate) fn default_face_value() -> f64 {
    100.0
}

impl BondTerms {
    /// Creates terms with the default calendar (weekend), business day rule
    /// (following), generation rule (backward), day count (ACT/360) and a
    /// face value of 100.
    #[must_use]
    pub fn new(maturity: Date, coupon: f64, frequency: Frequency) -> Self {
        Self {
            maturity,
            coupon,
            frequency,
            calendar: CalendarType::default(),
            business_day_convention: BusinessDayConvention::default(),
            date_gen_rule: DateGenRule::default(),
            day_count: DayCountConvention::default(),
            face_value: default_face_value(),
        }
    }

    /// Checks the numeric terms.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidTerms` if the coupon is not finite or the
    /// face value is not a finite positive amount.
    pub fn validate(&self) -> BondResult<()> {
        if !self.coupon.is_finite() {
            return Err(BondError::invalid_terms(format!(
                "coupon must be finite, got {}",
                self.coupon
            )));
        }
        if !self.face_value.is_finite() || self.face_value <= 0.0 {
            return Err(BondError::invalid_terms(format!(
                "face value must be positive, got {}",
                self.face_value
            )));
        }
        Ok(())
    }
}
