//! Annuity configuration.
//!
//! [`AnnuityConfig`] is the serialized form of [`BondTerms`]: conventions are
//! carried as market tags ("ACT/ACT ICMA", "SEMI_ANNUAL", "MODIFIED_FOLLOWING")
//! and only become enums when the config is converted.

use serde::{Deserialize, Serialize};

use accrual_core::calendars::{BusinessDayConvention, CalendarType};
use accrual_core::daycounts::DayCountConvention;
use accrual_core::types::{Date, DateGenRule, Frequency};

use crate::error::{BondError, BondResult};
use crate::instruments::BondTerms;

// =============================================================================
// ANNUITY CONFIGURATION
// =============================================================================

/// String-tagged annuity terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnuityConfig {
    /// Final coupon date.
    pub maturity: Date,

    /// Annual coupon rate as a decimal.
    pub coupon: f64,

    /// Coupon frequency tag.
    pub frequency: String,

    /// Holiday calendar tag.
    #[serde(default = "default_calendar")]
    pub calendar: String,

    /// Business day convention tag.
    #[serde(default = "default_business_day_convention")]
    pub business_day_convention: String,

    /// Date generation rule tag.
    #[serde(default = "default_date_gen_rule")]
    pub date_gen_rule: String,

    /// Day count convention tag.
    #[serde(default = "default_day_count")]
    pub day_count: String,

    /// Face (notional) amount.
    #[serde(default = "default_face_value")]
    pub face_value: f64,
}

// =============================================================================
// DEFAULT VALUE FUNCTIONS
// =============================================================================

fn default_calendar() -> String {
    "WEEKEND".to_string()
}

fn default_business_day_convention() -> String {
    "FOLLOWING".to_string()
}

fn default_date_gen_rule() -> String {
    "BACKWARD".to_string()
}

fn default_day_count() -> String {
    "ACT/360".to_string()
}

fn default_face_value() -> f64 {
    100.0
}

impl AnnuityConfig {
    /// Creates a config with default conventions.
    #[must_use]
    pub fn new(maturity: Date, coupon: f64, frequency: impl Into<String>) -> Self {
        Self {
            maturity,
            coupon,
            frequency: frequency.into(),
            calendar: default_calendar(),
            business_day_convention: default_business_day_convention(),
            date_gen_rule: default_date_gen_rule(),
            day_count: default_day_count(),
            face_value: default_face_value(),
        }
    }

    /// Parses a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns `BondError::Config` if the document is malformed or misses a
    /// required field. Convention tags are not checked here.
    pub fn from_json(json: &str) -> BondResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the config to pretty-printed JSON.
    pub fn to_json(&self) -> BondResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&BondTerms> for AnnuityConfig {
    fn from(terms: &BondTerms) -> Self {
        Self {
            maturity: terms.maturity,
            coupon: terms.coupon,
            frequency: terms.frequency.to_string(),
            calendar: terms.calendar.to_string(),
            business_day_convention: terms.business_day_convention.to_string(),
            date_gen_rule: terms.date_gen_rule.to_string(),
            day_count: terms.day_count.to_string(),
            face_value: terms.face_value,
        }
    }
}

impl TryFrom<&AnnuityConfig> for BondTerms {
    type Error = BondError;

    fn try_from(config: &AnnuityConfig) -> Result<Self, Self::Error> {
        let terms = BondTerms {
            maturity: config.maturity,
            coupon: config.coupon,
            frequency: config.frequency.parse::<Frequency>()?,
            calendar: config.calendar.parse::<CalendarType>()?,
            business_day_convention: config.business_day_convention.parse::<BusinessDayConvention>()?,
            date_gen_rule: config.date_gen_rule.parse::<DateGenRule>()?,
            day_count: config.day_count.parse::<DayCountConvention>()?,
            face_value: config.face_value,
        };
        terms.validate()?;
        Ok(terms)
    }
}
