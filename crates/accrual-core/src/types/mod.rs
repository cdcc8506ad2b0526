//! Domain types for annuity analytics.
//!
//! - [`Date`]: Calendar date for financial calculations
//! - [`Frequency`]: Coupon payment frequency
//! - [`DateGenRule`]: Direction of schedule generation

mod date;
mod frequency;

pub use date::Date;
pub use frequency::{DateGenRule, Frequency};
