//! Concrete discount curves.

mod flat;
mod interpolated;

pub use flat::FlatCurve;
pub use interpolated::{InterpolatedDiscountCurve, InterpolatedDiscountCurveBuilder};
