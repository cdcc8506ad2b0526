//! Property tests for annuity accrual and flow identities.

use accrual_bonds::prelude::*;
use accrual_core::prelude::*;
use accrual_curves::prelude::*;
use proptest::prelude::*;

fn frequency() -> impl Strategy<Value = Frequency> {
    prop::sample::select(Frequency::all().to_vec())
}

fn day_count() -> impl Strategy<Value = DayCountConvention> {
    prop::sample::select(DayCountConvention::all().to_vec())
}

fn maturity() -> Date {
    Date::from_ymd(2030, 6, 30).unwrap()
}

fn annuity(frequency: Frequency, day_count: DayCountConvention, coupon: f64, face: f64) -> BondAnnuity {
    BondAnnuity::builder()
        .maturity(maturity())
        .coupon(coupon)
        .frequency(frequency)
        .day_count(day_count)
        .face_value(face)
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn accrued_share_and_remaining_sum_to_one(
        freq in frequency(),
        dc in day_count(),
        offset in 0i64..1900,
        coupon in 0.001f64..0.12,
    ) {
        let settlement = Date::from_ymd(2025, 1, 1).unwrap().add_days(offset);
        prop_assume!(settlement != maturity());

        let face = 100.0;
        let mut bond = annuity(freq, dc, coupon, face);
        let accrued = bond.calc_accrued_interest(settlement).unwrap();
        let cache = bond.cache();

        let mut share = accrued / (coupon * face);
        if dc == DayCountConvention::ActActIcma {
            share *= f64::from(freq.periods_per_year());
        }
        prop_assert!((share + cache.accrued_fraction() - 1.0).abs() < 1e-9);
        prop_assert!(cache.previous_coupon_date().unwrap() <= settlement);
        prop_assert!(cache.next_coupon_date().unwrap() > settlement);
    }

    #[test]
    fn clean_is_full_less_accrued_per_hundred(
        freq in frequency(),
        dc in day_count(),
        offset in 0i64..1900,
        face in 1.0f64..1_000_000.0,
        rate in -0.01f64..0.10,
    ) {
        let settlement = Date::from_ymd(2025, 1, 1).unwrap().add_days(offset);
        prop_assume!(settlement != maturity());

        let curve = FlatCurve::new(settlement, rate).unwrap();
        let mut bond = annuity(freq, dc, 0.05, face);
        let full = bond.full_price_from_discount_curve(settlement, &curve).unwrap();
        let clean = bond.clean_price_from_discount_curve(settlement, &curve).unwrap();
        let accrued = bond.calc_accrued_interest(settlement).unwrap();

        prop_assert!((clean - (full - accrued * 100.0 / face)).abs() < 1e-9);
        prop_assert_eq!(bond.cache().generation(), 1);
    }

    #[test]
    fn flow_amounts_follow_period_fractions(
        freq in frequency(),
        dc in day_count(),
        offset in 0i64..1900,
    ) {
        let settlement = Date::from_ymd(2025, 1, 1).unwrap().add_days(offset);
        prop_assume!(settlement != maturity());

        let (coupon, face) = (0.045, 250.0);
        let mut bond = annuity(freq, dc, coupon, face);
        let cache = bond.valuation(settlement).unwrap();
        let dates = cache.flow_dates();
        let amounts = cache.flow_amounts();

        prop_assert_eq!(dates.len(), amounts.len());
        prop_assert_eq!(amounts[0], 0.0);
        prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));

        let engine = dc.to_day_count();
        for i in 1..dates.len() {
            let fraction = engine
                .period_fraction(dates[i - 1], dates[i], freq.periods_per_year())
                .unwrap();
            prop_assert!((amounts[i] - coupon * face * fraction).abs() < 1e-12);
        }
    }
}
