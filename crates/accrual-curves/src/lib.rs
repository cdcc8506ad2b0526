//! # Accrual Curves
//!
//! Discounting for the Accrual annuity valuation library.
//!
//! Pricing code depends only on the [`DiscountCurve`] trait. Two curves
//! ship with the crate:
//!
//! - [`FlatCurve`](curves::FlatCurve): one continuously compounded rate
//! - [`InterpolatedDiscountCurve`](curves::InterpolatedDiscountCurve):
//!   log-linear discount factors through market pillars
//!
//! ```rust
//! use accrual_core::Date;
//! use accrual_curves::prelude::*;
//!
//! let today = Date::from_ymd(2025, 1, 15).unwrap();
//! let curve = FlatCurve::new(today, 0.03).unwrap();
//! assert_eq!(curve.discount_factor(today).unwrap(), 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]

pub mod curves;
pub mod error;
pub mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curves::{FlatCurve, InterpolatedDiscountCurve, InterpolatedDiscountCurveBuilder};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::traits::DiscountCurve;
}

pub use error::{CurveError, CurveResult};
pub use traits::DiscountCurve;
