//! Annuity instrument, its terms and its settlement-dependent state.

mod annuity;
mod cache;
mod terms;

pub use annuity::{BondAnnuity, BondAnnuityBuilder};
pub use cache::ValuationCache;
pub use terms::BondTerms;
