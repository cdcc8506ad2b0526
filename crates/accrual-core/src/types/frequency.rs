//! Coupon frequency and schedule generation direction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{normalize_tag, ConventionParseError};

/// Payment frequency for coupon schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Annual payments (1 per year)
    Annual,
    /// Semi-annual payments (2 per year)
    #[default]
    SemiAnnual,
    /// Tri-annual payments (3 per year, every 4 months)
    TriAnnual,
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Monthly payments (12 per year)
    Monthly,
}

impl Frequency {
    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::TriAnnual => 3,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }

    /// Returns the number of months per period (`12 / periods_per_year`).
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }

    /// Returns all supported frequencies.
    #[must_use]
    pub fn all() -> &'static [Frequency] {
        &[
            Frequency::Annual,
            Frequency::SemiAnnual,
            Frequency::TriAnnual,
            Frequency::Quarterly,
            Frequency::Monthly,
        ]
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::TriAnnual => "Tri-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Frequency {
    type Err = ConventionParseError;

    /// Parses a frequency tag. Zero-coupon, simple and continuous tags are
    /// not coupon frequencies and are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "ANNUAL" | "1" | "A" => Ok(Frequency::Annual),
            "SEMI ANNUAL" | "SEMIANNUAL" | "2" | "S" => Ok(Frequency::SemiAnnual),
            "TRI ANNUAL" | "TRIANNUAL" | "3" => Ok(Frequency::TriAnnual),
            "QUARTERLY" | "4" | "Q" => Ok(Frequency::Quarterly),
            "MONTHLY" | "12" | "M" => Ok(Frequency::Monthly),
            _ => Err(ConventionParseError::new("frequency", s)),
        }
    }
}

/// Direction in which schedule dates are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DateGenRule {
    /// Step forward from the start date; any stub falls at the end.
    Forward,
    /// Step backward from the end date; any stub falls at the start.
    #[default]
    Backward,
}

impl fmt::Display for DateGenRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateGenRule::Forward => write!(f, "Forward"),
            DateGenRule::Backward => write!(f, "Backward"),
        }
    }
}

impl FromStr for DateGenRule {
    type Err = ConventionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "FORWARD" => Ok(DateGenRule::Forward),
            "BACKWARD" => Ok(DateGenRule::Backward),
            _ => Err(ConventionParseError::new("date generation rule", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_periods() {
        assert_eq!(Frequency::Annual.periods_per_year(), 1);
        assert_eq!(Frequency::SemiAnnual.periods_per_year(), 2);
        assert_eq!(Frequency::TriAnnual.periods_per_year(), 3);
        assert_eq!(Frequency::Quarterly.periods_per_year(), 4);
        assert_eq!(Frequency::Monthly.periods_per_year(), 12);
    }

    #[test]
    fn test_months_per_period() {
        assert_eq!(Frequency::Annual.months_per_period(), 12);
        assert_eq!(Frequency::SemiAnnual.months_per_period(), 6);
        assert_eq!(Frequency::TriAnnual.months_per_period(), 4);
        assert_eq!(Frequency::Quarterly.months_per_period(), 3);
        assert_eq!(Frequency::Monthly.months_per_period(), 1);
    }

    #[test]
    fn test_frequency_from_str() {
        assert_eq!("SEMI_ANNUAL".parse::<Frequency>().unwrap(), Frequency::SemiAnnual);
        assert_eq!("semi-annual".parse::<Frequency>().unwrap(), Frequency::SemiAnnual);
        assert_eq!("Quarterly".parse::<Frequency>().unwrap(), Frequency::Quarterly);
        assert_eq!("12".parse::<Frequency>().unwrap(), Frequency::Monthly);
    }

    #[test]
    fn test_frequency_rejects_non_coupon_tags() {
        for tag in ["ZERO", "CONTINUOUS", "SIMPLE", "FORTNIGHTLY", ""] {
            let err = tag.parse::<Frequency>().unwrap_err();
            assert_eq!(err.kind, "frequency");
        }
    }

    #[test]
    fn test_display_roundtrip() {
        for freq in Frequency::all() {
            let parsed: Frequency = freq.to_string().parse().unwrap();
            assert_eq!(*freq, parsed);
        }
    }

    #[test]
    fn test_date_gen_rule() {
        assert_eq!(DateGenRule::default(), DateGenRule::Backward);
        assert_eq!("forward".parse::<DateGenRule>().unwrap(), DateGenRule::Forward);
        assert!("SIDEWAYS".parse::<DateGenRule>().is_err());
    }
}
