//! Settlement-dependent derived state.

use accrual_core::Date;

/// Flows and accrual derived for one settlement date.
///
/// A cache is either empty (never built) or describes exactly one
/// settlement. `flow_dates` is strictly increasing, starts at the previous
/// coupon date and has one amount per date, the first always 0.0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValuationCache {
    pub(crate) settlement: Option<Date>,
    pub(crate) flow_dates: Vec<Date>,
    pub(crate) flow_amounts: Vec<f64>,
    pub(crate) previous_coupon_date: Option<Date>,
    pub(crate) next_coupon_date: Option<Date>,
    pub(crate) accrued_interest: f64,
    pub(crate) accrued_fraction: f64,
    pub(crate) accrued_days: i64,
    pub(crate) generation: u64,
}

impl ValuationCache {
    /// Returns true if the cache was built for `settlement`.
    #[must_use]
    pub fn is_valid_for(&self, settlement: Date) -> bool {
        self.settlement == Some(settlement)
    }

    /// Settlement date the cache describes, if built.
    #[must_use]
    pub fn settlement(&self) -> Option<Date> {
        self.settlement
    }

    /// Previous coupon date followed by every remaining coupon date.
    #[must_use]
    pub fn flow_dates(&self) -> &[Date] {
        &self.flow_dates
    }

    /// Coupon amounts aligned with [`flow_dates`](Self::flow_dates).
    #[must_use]
    pub fn flow_amounts(&self) -> &[f64] {
        &self.flow_amounts
    }

    /// Last coupon date on or before settlement.
    #[must_use]
    pub fn previous_coupon_date(&self) -> Option<Date> {
        self.previous_coupon_date
    }

    /// First coupon date after settlement.
    #[must_use]
    pub fn next_coupon_date(&self) -> Option<Date> {
        self.next_coupon_date
    }

    /// Accrued interest in face-value currency units.
    #[must_use]
    pub fn accrued_interest(&self) -> f64 {
        self.accrued_interest
    }

    /// Unaccrued share of the current coupon period.
    #[must_use]
    pub fn accrued_fraction(&self) -> f64 {
        self.accrued_fraction
    }

    /// Calendar days from the previous coupon date to settlement.
    #[must_use]
    pub fn accrued_days(&self) -> i64 {
        self.accrued_days
    }

    /// Number of times the cache has been rebuilt.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
