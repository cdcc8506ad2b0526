//! Fixed-rate annuity bond.
//!
//! An annuity pays a fixed coupon each period until maturity and never
//! redeems principal. Valuation is driven by the settlement date: the first
//! call for a settlement builds the flow schedule and accrual into a
//! [`ValuationCache`], and later calls for the same settlement reuse it.

use std::fmt;

use accrual_core::calendars::{BusinessDayConvention, CalendarType};
use accrual_core::daycounts::DayCountConvention;
use accrual_core::types::{Date, DateGenRule, Frequency};
use accrual_curves::DiscountCurve;

use crate::cashflows::{Schedule, ScheduleConfig};
use crate::config::AnnuityConfig;
use crate::error::{BondError, BondResult};
use crate::instruments::{BondTerms, ValuationCache};

/// Prices are quoted per this notional.
const PAR: f64 = 100.0;

/// A fixed-rate, non-amortizing annuity.
///
/// # Example
///
/// ```rust
/// use accrual_bonds::prelude::*;
/// use accrual_core::prelude::*;
/// use accrual_curves::prelude::*;
///
/// let settlement = Date::from_ymd(2025, 1, 15).unwrap();
/// let mut annuity = BondAnnuity::builder()
///     .maturity(Date::from_ymd(2030, 1, 15).unwrap())
///     .coupon(0.05)
///     .frequency(Frequency::SemiAnnual)
///     .build()
///     .unwrap();
///
/// let curve = FlatCurve::new(settlement, 0.03).unwrap();
/// let full = annuity.full_price_from_discount_curve(settlement, &curve).unwrap();
/// let clean = annuity.clean_price_from_discount_curve(settlement, &curve).unwrap();
/// assert_eq!(full, clean); // settles on a coupon date
/// ```
#[derive(Debug, Clone)]
pub struct BondAnnuity {
    terms: BondTerms,
    periods_per_year: u32,
    cache: ValuationCache,
}

impl BondAnnuity {
    /// Creates an annuity from validated terms.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidTerms` if the coupon or face value is out
    /// of range.
    pub fn new(terms: BondTerms) -> BondResult<Self> {
        terms.validate()?;
        Ok(Self {
            periods_per_year: terms.frequency.periods_per_year(),
            terms,
            cache: ValuationCache::default(),
        })
    }

    /// Returns a builder with the default conventions.
    #[must_use]
    pub fn builder() -> BondAnnuityBuilder {
        BondAnnuityBuilder::new()
    }

    /// Creates an annuity from string-tagged configuration.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidConvention` for an unknown convention tag
    /// and `BondError::InvalidTerms` for out-of-range numbers.
    pub fn from_config(config: &AnnuityConfig) -> BondResult<Self> {
        Self::new(BondTerms::try_from(config)?)
    }

    /// Builds the flow dates and amounts for `settlement`.
    ///
    /// Returns immediately if the cache already describes `settlement`. On
    /// failure the previous cache is left untouched.
    ///
    /// # Errors
    ///
    /// - `BondError::InvalidSettlement` if settlement equals maturity
    /// - `BondError::InsufficientFlows` if no coupon remains after settlement
    /// - `BondError::Core` if a day count fraction cannot be computed
    pub fn calculate_flow_dates_payments(&mut self, settlement: Date) -> BondResult<()> {
        if self.cache.is_valid_for(settlement) {
            log::trace!("valuation cache hit for settlement {settlement}");
            return Ok(());
        }

        let cache = self.build_cache(settlement)?;
        log::debug!(
            "rebuilt annuity flows for settlement {settlement}: pcd {}, ncd {}, {} flows",
            cache.flow_dates[0],
            cache.flow_dates[1],
            cache.flow_dates.len() - 1
        );
        self.cache = cache;
        Ok(())
    }

    fn build_cache(&self, settlement: Date) -> BondResult<ValuationCache> {
        let maturity = self.terms.maturity;
        if settlement == maturity {
            return Err(BondError::InvalidSettlement {
                settlement,
                maturity,
            });
        }

        // Valuation dates are generated unadjusted, whatever the instrument's
        // own calendar and business day rule.
        let config = ScheduleConfig::new(settlement, maturity, self.terms.frequency)
            .with_calendar(CalendarType::None)
            .with_business_day_convention(BusinessDayConvention::Unadjusted)
            .with_date_gen_rule(DateGenRule::Backward);
        let flow_dates = Schedule::generate(config)?.into_dates();

        if flow_dates.len() < 2 {
            return Err(BondError::InsufficientFlows {
                count: flow_dates.len(),
            });
        }

        let pcd = flow_dates[0];
        let ncd = flow_dates[1];
        let day_count = self.terms.day_count.to_day_count();
        let coupon = self.terms.coupon;
        let face = self.terms.face_value;

        let accrual = day_count.accrual(pcd, settlement, ncd, self.periods_per_year)?;

        let mut flow_amounts = Vec::with_capacity(flow_dates.len());
        flow_amounts.push(0.0);
        for window in flow_dates.windows(2) {
            let fraction = day_count.period_fraction(window[0], window[1], self.periods_per_year)?;
            let amount = coupon * fraction * face;
            log::trace!("flow {}: {amount}", window[1]);
            flow_amounts.push(amount);
        }

        Ok(ValuationCache {
            settlement: Some(settlement),
            previous_coupon_date: Some(pcd),
            next_coupon_date: Some(ncd),
            accrued_interest: accrual.factor * face * coupon,
            accrued_fraction: accrual.remaining,
            accrued_days: settlement - pcd,
            generation: self.cache.generation + 1,
            flow_dates,
            flow_amounts,
        })
    }

    /// Returns the derived state for `settlement`, rebuilding it if stale.
    ///
    /// # Errors
    ///
    /// Same as [`calculate_flow_dates_payments`](Self::calculate_flow_dates_payments).
    pub fn valuation(&mut self, settlement: Date) -> BondResult<&ValuationCache> {
        self.calculate_flow_dates_payments(settlement)?;
        Ok(&self.cache)
    }

    /// Returns the current cache without rebuilding it.
    #[must_use]
    pub fn cache(&self) -> &ValuationCache {
        &self.cache
    }

    /// Accrued interest at `settlement` in face-value currency units.
    ///
    /// # Errors
    ///
    /// Same as [`calculate_flow_dates_payments`](Self::calculate_flow_dates_payments).
    pub fn calc_accrued_interest(&mut self, settlement: Date) -> BondResult<f64> {
        Ok(self.valuation(settlement)?.accrued_interest)
    }

    /// Present value per 100 of face, including accrued interest.
    ///
    /// Each remaining coupon is discounted at the curve's factor for its
    /// payment date.
    ///
    /// # Errors
    ///
    /// Returns the rebuild errors of
    /// [`calculate_flow_dates_payments`](Self::calculate_flow_dates_payments),
    /// or `BondError::Curve` if the curve cannot produce a discount factor.
    pub fn full_price_from_discount_curve<C>(&mut self, settlement: Date, curve: &C) -> BondResult<f64>
    where
        C: DiscountCurve + ?Sized,
    {
        self.calculate_flow_dates_payments(settlement)?;

        let mut pv = 0.0;
        for (&date, &amount) in self.cache.flow_dates.iter().zip(&self.cache.flow_amounts).skip(1) {
            pv += amount * curve.discount_factor(date)?;
        }

        Ok(pv * PAR / self.terms.face_value)
    }

    /// Present value per 100 of face, excluding accrued interest.
    ///
    /// # Errors
    ///
    /// Same as [`full_price_from_discount_curve`](Self::full_price_from_discount_curve).
    pub fn clean_price_from_discount_curve<C>(&mut self, settlement: Date, curve: &C) -> BondResult<f64>
    where
        C: DiscountCurve + ?Sized,
    {
        let full = self.full_price_from_discount_curve(settlement, curve)?;
        let accrued = self.cache.accrued_interest * PAR / self.terms.face_value;
        Ok(full - accrued)
    }

    /// Remaining coupon dates and amounts after settlement.
    ///
    /// # Errors
    ///
    /// Same as [`calculate_flow_dates_payments`](Self::calculate_flow_dates_payments).
    pub fn flows(&mut self, settlement: Date) -> BondResult<Vec<(Date, f64)>> {
        let cache = self.valuation(settlement)?;
        Ok(cache
            .flow_dates
            .iter()
            .copied()
            .zip(cache.flow_amounts.iter().copied())
            .skip(1)
            .collect())
    }

    /// One `date, amount` line per remaining coupon.
    ///
    /// # Errors
    ///
    /// Same as [`calculate_flow_dates_payments`](Self::calculate_flow_dates_payments).
    pub fn flow_report(&mut self, settlement: Date) -> BondResult<String> {
        let flows = self.flows(settlement)?;
        Ok(flows
            .iter()
            .map(|(date, amount)| format!("{date}, {amount}\n"))
            .collect())
    }

    /// Returns the contractual terms.
    #[must_use]
    pub fn terms(&self) -> &BondTerms {
        &self.terms
    }

    /// Final coupon date.
    #[must_use]
    pub fn maturity(&self) -> Date {
        self.terms.maturity
    }

    /// Annual coupon rate as a decimal.
    #[must_use]
    pub fn coupon(&self) -> f64 {
        self.terms.coupon
    }

    /// Coupon frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.terms.frequency
    }

    /// Coupons per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        self.periods_per_year
    }

    /// Holiday calendar.
    #[must_use]
    pub fn calendar(&self) -> CalendarType {
        self.terms.calendar
    }

    /// Business day adjustment rule.
    #[must_use]
    pub fn business_day_convention(&self) -> BusinessDayConvention {
        self.terms.business_day_convention
    }

    /// Schedule generation direction.
    #[must_use]
    pub fn date_gen_rule(&self) -> DateGenRule {
        self.terms.date_gen_rule
    }

    /// Accrual day count.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.terms.day_count
    }

    /// Face (notional) amount.
    #[must_use]
    pub fn face_value(&self) -> f64 {
        self.terms.face_value
    }

    /// Quotation notional; always 100.
    #[must_use]
    pub fn par(&self) -> f64 {
        PAR
    }
}

impl fmt::Display for BondAnnuity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "END DATE: {}", self.terms.maturity)?;
        writeln!(f, "FREQUENCY: {}", self.terms.frequency)?;
        writeln!(f, "CALENDAR: {}", self.terms.calendar)?;
        writeln!(f, "BUSDAYRULE: {}", self.terms.business_day_convention)?;
        writeln!(f, "DATEGENRULE: {}", self.terms.date_gen_rule)?;
        writeln!(f, "COUPON: {}", self.terms.coupon)?;
        writeln!(f, "DAYCOUNT: {}", self.terms.day_count)?;
        write!(f, "FACE: {}", self.terms.face_value)
    }
}

/// Builder for [`BondAnnuity`].
#[derive(Debug, Clone)]
pub struct BondAnnuityBuilder {
    maturity: Option<Date>,
    coupon: Option<f64>,
    frequency: Option<Frequency>,
    calendar: CalendarType,
    business_day_convention: BusinessDayConvention,
    date_gen_rule: DateGenRule,
    day_count: DayCountConvention,
    face_value: f64,
}

impl Default for BondAnnuityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BondAnnuityBuilder {
    /// Creates a new builder with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            maturity: None,
            coupon: None,
            frequency: None,
            calendar: CalendarType::default(),
            business_day_convention: BusinessDayConvention::default(),
            date_gen_rule: DateGenRule::default(),
            day_count: DayCountConvention::default(),
            face_value: super::terms::default_face_value(),
        }
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity(mut self, date: Date) -> Self {
        self.maturity = Some(date);
        self
    }

    /// Sets the coupon rate (as decimal, 0.05 = 5%).
    #[must_use]
    pub fn coupon(mut self, rate: f64) -> Self {
        self.coupon = Some(rate);
        self
    }

    /// Sets the coupon frequency.
    #[must_use]
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Sets the holiday calendar.
    #[must_use]
    pub fn calendar(mut self, calendar: CalendarType) -> Self {
        self.calendar = calendar;
        self
    }

    /// Sets the business day convention.
    #[must_use]
    pub fn business_day_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.business_day_convention = convention;
        self
    }

    /// Sets the date generation rule.
    #[must_use]
    pub fn date_gen_rule(mut self, rule: DateGenRule) -> Self {
        self.date_gen_rule = rule;
        self
    }

    /// Sets the day count convention.
    #[must_use]
    pub fn day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Sets the face value.
    #[must_use]
    pub fn face_value(mut self, face_value: f64) -> Self {
        self.face_value = face_value;
        self
    }

    /// Builds the annuity.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidTerms` if maturity, coupon or frequency is
    /// missing, or if the numeric terms are out of range.
    pub fn build(self) -> BondResult<BondAnnuity> {
        let maturity = self
            .maturity
            .ok_or_else(|| BondError::invalid_terms("maturity is required"))?;
        let coupon = self
            .coupon
            .ok_or_else(|| BondError::invalid_terms("coupon is required"))?;
        let frequency = self
            .frequency
            .ok_or_else(|| BondError::invalid_terms("frequency is required"))?;

        BondAnnuity::new(BondTerms {
            maturity,
            coupon,
            frequency,
            calendar: self.calendar,
            business_day_convention: self.business_day_convention,
            date_gen_rule: self.date_gen_rule,
            day_count: self.day_count,
            face_value: self.face_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accrual_curves::curves::FlatCurve;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn five_year() -> BondAnnuity {
        BondAnnuity::builder()
            .maturity(d(2030, 1, 15))
            .coupon(0.05)
            .frequency(Frequency::SemiAnnual)
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let annuity = five_year();
        assert_eq!(annuity.calendar(), CalendarType::Weekend);
        assert_eq!(annuity.business_day_convention(), BusinessDayConvention::Following);
        assert_eq!(annuity.date_gen_rule(), DateGenRule::Backward);
        assert_eq!(annuity.day_count(), DayCountConvention::Act360);
        assert_eq!(annuity.face_value(), 100.0);
        assert_eq!(annuity.par(), 100.0);
        assert_eq!(annuity.periods_per_year(), 2);
    }

    #[test]
    fn test_builder_requires_core_terms() {
        let err = BondAnnuity::builder().coupon(0.05).frequency(Frequency::Annual).build();
        assert!(matches!(err, Err(BondError::InvalidTerms { .. })));

        let err = BondAnnuity::builder()
            .maturity(d(2030, 1, 15))
            .coupon(0.05)
            .frequency(Frequency::Annual)
            .face_value(-1.0)
            .build();
        assert!(matches!(err, Err(BondError::InvalidTerms { .. })));
    }

    #[test]
    fn test_flow_dates_and_amounts_mid_period() {
        let mut annuity = five_year();
        let settlement = d(2025, 3, 1);
        let cache = annuity.valuation(settlement).unwrap();

        assert_eq!(cache.previous_coupon_date(), Some(d(2025, 1, 15)));
        assert_eq!(cache.next_coupon_date(), Some(d(2025, 7, 15)));
        assert_eq!(cache.flow_dates().len(), 11);
        assert_eq!(cache.flow_amounts()[0], 0.0);
        // 2025-01-15 to 2025-07-15 is 181 days
        assert_relative_eq!(cache.flow_amounts()[1], 0.05 * 181.0 / 360.0 * 100.0, epsilon = 1e-12);
        assert_eq!(cache.accrued_days(), 45);
        assert_relative_eq!(cache.accrued_interest(), 0.05 * 45.0 / 360.0 * 100.0, epsilon = 1e-12);
        assert_relative_eq!(cache.accrued_fraction(), 1.0 - 45.0 / 360.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cache_reused_for_same_settlement() {
        let mut annuity = five_year();
        let settlement = d(2025, 3, 1);

        let first = annuity.calc_accrued_interest(settlement).unwrap();
        assert_eq!(annuity.cache().generation(), 1);
        let second = annuity.calc_accrued_interest(settlement).unwrap();
        assert_eq!(annuity.cache().generation(), 1);
        assert_eq!(first, second);

        annuity.calc_accrued_interest(d(2025, 3, 2)).unwrap();
        assert_eq!(annuity.cache().generation(), 2);
    }

    #[test]
    fn test_failed_rebuild_keeps_previous_cache() {
        let mut annuity = five_year();
        annuity.calculate_flow_dates_payments(d(2025, 3, 1)).unwrap();
        let before = annuity.cache().clone();

        let err = annuity.calculate_flow_dates_payments(d(2030, 1, 15)).unwrap_err();
        assert!(matches!(err, BondError::InvalidSettlement { .. }));
        assert_eq!(annuity.cache(), &before);
    }

    #[test]
    fn test_settlement_after_maturity() {
        let mut annuity = five_year();
        let err = annuity.calculate_flow_dates_payments(d(2031, 1, 1)).unwrap_err();
        assert_eq!(err, BondError::InsufficientFlows { count: 1 });
    }

    #[test]
    fn test_settlement_on_coupon_date_accrues_nothing() {
        let mut annuity = five_year();
        assert_eq!(annuity.calc_accrued_interest(d(2027, 7, 15)).unwrap(), 0.0);
        assert_eq!(annuity.cache().accrued_fraction(), 1.0);
    }

    #[test]
    fn test_clean_is_full_less_accrued() {
        let mut annuity = five_year();
        let settlement = d(2025, 3, 1);
        let curve = FlatCurve::new(settlement, 0.03).unwrap();

        let full = annuity.full_price_from_discount_curve(settlement, &curve).unwrap();
        let clean = annuity.clean_price_from_discount_curve(settlement, &curve).unwrap();
        let accrued = annuity.calc_accrued_interest(settlement).unwrap();
        assert_relative_eq!(clean, full - accrued, epsilon = 1e-12);
        assert_eq!(annuity.cache().generation(), 1);
    }

    #[test]
    fn test_prices_are_quoted_per_hundred() {
        let settlement = d(2025, 3, 1);
        let curve = FlatCurve::new(settlement, 0.03).unwrap();

        let mut small = five_year();
        let mut large = BondAnnuity::new(BondTerms {
            face_value: 1_000_000.0,
            ..small.terms().clone()
        })
        .unwrap();

        let p_small = small.full_price_from_discount_curve(settlement, &curve).unwrap();
        let p_large = large.full_price_from_discount_curve(settlement, &curve).unwrap();
        assert_relative_eq!(p_small, p_large, epsilon = 1e-9);
        assert_relative_eq!(
            large.calc_accrued_interest(settlement).unwrap(),
            small.calc_accrued_interest(settlement).unwrap() * 10_000.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_icma_accrual_divides_by_frequency() {
        let mut annuity = BondAnnuity::builder()
            .maturity(d(2026, 7, 1))
            .coupon(0.05)
            .frequency(Frequency::SemiAnnual)
            .day_count(DayCountConvention::ActActIcma)
            .build()
            .unwrap();

        let settlement = d(2024, 4, 1);
        let cache = annuity.valuation(settlement).unwrap();
        assert_eq!(cache.previous_coupon_date(), Some(d(2024, 1, 1)));
        assert_relative_eq!(cache.accrued_fraction(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(cache.accrued_interest(), 1.25, epsilon = 1e-12);
        // Each full ICMA period pays coupon / frequency
        for amount in &cache.flow_amounts()[1..] {
            assert_relative_eq!(*amount, 2.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_flows_and_report() {
        let mut annuity = five_year();
        let settlement = d(2028, 3, 1);
        let flows = annuity.flows(settlement).unwrap();

        assert_eq!(flows.len(), 4);
        assert_eq!(flows[0].0, d(2028, 7, 15));
        assert_eq!(flows[3].0, d(2030, 1, 15));

        let report = annuity.flow_report(settlement).unwrap();
        assert_eq!(report.lines().count(), 4);
        assert!(report.starts_with("2028-07-15, "));
    }

    #[test]
    fn test_display() {
        let text = five_year().to_string();
        assert!(text.contains("END DATE: 2030-01-15"));
        assert!(text.contains("FREQUENCY: Semi-Annual"));
        assert!(text.contains("CALENDAR:"));
        assert!(text.contains("BUSDAYRULE:"));
        assert!(text.contains("DATEGENRULE:"));
    }
}
