//! # Accrual Bonds
//!
//! Fixed-rate annuity valuation for the Accrual library.
//!
//! This crate provides:
//!
//! - **Schedules**: backward or forward coupon date generation with optional
//!   business day adjustment
//! - **Instruments**: [`BondAnnuity`](instruments::BondAnnuity), a coupon-only
//!   bond with memoized flows and accrued interest per settlement date
//! - **Configuration**: [`AnnuityConfig`](config::AnnuityConfig), string-tagged
//!   terms readable from JSON
//!
//! ## Example
//!
//! ```rust
//! use accrual_bonds::prelude::*;
//! use accrual_core::Date;
//! use accrual_curves::prelude::*;
//!
//! let config = AnnuityConfig::from_json(
//!     r#"{"maturity": "2030-01-15", "coupon": 0.05, "frequency": "SEMI_ANNUAL"}"#,
//! )
//! .unwrap();
//! let mut annuity = BondAnnuity::from_config(&config).unwrap();
//!
//! let settlement = Date::from_ymd(2025, 3, 1).unwrap();
//! let curve = FlatCurve::new(settlement, 0.03).unwrap();
//!
//! let accrued = annuity.calc_accrued_interest(settlement).unwrap();
//! let clean = annuity.clean_price_from_discount_curve(settlement, &curve).unwrap();
//! let full = annuity.full_price_from_discount_curve(settlement, &curve).unwrap();
//! assert!((full - clean - accrued).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::return_self_not_must_use)]

pub mod cashflows;
pub mod config;
pub mod error;
pub mod instruments;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::{Schedule, ScheduleConfig};
    pub use crate::config::AnnuityConfig;
    pub use crate::error::{BondError, BondResult};
    pub use crate::instruments::{BondAnnuity, BondAnnuityBuilder, BondTerms, ValuationCache};
}

pub use error::{BondError, BondResult};
