//! # Accrual Core
//!
//! Core types and conventions for the Accrual annuity valuation library.
//!
//! - **Types**: [`Date`], [`Frequency`](types::Frequency),
//!   [`DateGenRule`](types::DateGenRule)
//! - **Day Count Conventions**: single-sided (ACT/360, ACT/365F, ACT/ACT ISDA,
//!   30/360) and period-relative (ACT/ACT ICMA) year fractions
//! - **Calendars**: the [`Calendar`](calendars::Calendar) seam plus
//!   business day adjustment rules
//!
//! Every convention is a closed enum that parses from its market spelling:
//!
//! ```rust
//! use accrual_core::prelude::*;
//!
//! let dc: DayCountConvention = "ACT/ACT ICMA".parse().unwrap();
//! let freq: Frequency = "SEMI_ANNUAL".parse().unwrap();
//! assert_eq!(freq.periods_per_year(), 2);
//!
//! let pcd = Date::from_ymd(2024, 1, 1).unwrap();
//! let settle = Date::from_ymd(2024, 4, 1).unwrap();
//! let ncd = Date::from_ymd(2024, 7, 1).unwrap();
//! let accrual = dc.to_day_count().accrual(pcd, settle, ncd, 2).unwrap();
//! assert_eq!(accrual.factor, 0.25);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{BusinessDayConvention, Calendar, CalendarType};
    pub use crate::daycounts::{Accrual, DayCount, DayCountConvention};
    pub use crate::error::{AccrualError, AccrualResult, ConventionParseError};
    pub use crate::types::{Date, DateGenRule, Frequency};
}

pub use error::{AccrualError, AccrualResult, ConventionParseError};
pub use types::Date;
