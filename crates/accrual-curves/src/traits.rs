//! Core trait for discounting.
//!
//! Valuation code only ever asks a curve for the discount factor of a date.
//! [`DiscountCurve`] is that contract; everything else on the trait is
//! derived from it.

use accrual_core::daycounts::{Act365Fixed, DayCount};
use accrual_core::Date;

use crate::error::CurveResult;

/// A discount curve: date to present-value multiplier.
///
/// Implementations are pure and reentrant (`Send + Sync`, no interior
/// mutability), so one curve can be shared by any number of concurrent
/// valuations.
///
/// For a sane curve the factor lies in (0, 1] and is non-increasing in the
/// date; implementations are not required to enforce monotonicity.
pub trait DiscountCurve: Send + Sync {
    /// Returns the curve's reference (valuation) date.
    fn reference_date(&self) -> Date;

    /// Returns the discount factor for `date`.
    ///
    /// Dates on or before the reference date discount at 1.0.
    fn discount_factor(&self, date: Date) -> CurveResult<f64>;

    /// Continuously compounded zero rate to `date`, on an ACT/365F time axis.
    ///
    /// Returns 0.0 at the reference date.
    fn zero_rate(&self, date: Date) -> CurveResult<f64> {
        let reference = self.reference_date();
        if date <= reference {
            return Ok(0.0);
        }
        let t = Act365Fixed.year_fraction(reference, date, None)?;
        let df = self.discount_factor(date)?;
        Ok(-df.ln() / t)
    }
}

impl<C: DiscountCurve + ?Sized> DiscountCurve for &C {
    fn reference_date(&self) -> Date {
        (**self).reference_date()
    }

    fn discount_factor(&self, date: Date) -> CurveResult<f64> {
        (**self).discount_factor(date)
    }
}

impl<C: DiscountCurve + ?Sized> DiscountCurve for Box<C> {
    fn reference_date(&self) -> Date {
        (**self).reference_date()
    }

    fn discount_factor(&self, date: Date) -> CurveResult<f64> {
        (**self).discount_factor(date)
    }
}

impl<C: DiscountCurve + ?Sized> DiscountCurve for std::sync::Arc<C> {
    fn reference_date(&self) -> Date {
        (**self).reference_date()
    }

    fn discount_factor(&self, date: Date) -> CurveResult<f64> {
        (**self).discount_factor(date)
    }
}
