//! Property-based tests for the coupon engine.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::coupon::service::CouponEngine;

/// Amounts in cents up to 1,000,000.00, strictly positive.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..=100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Whole-basis-point percentages in [0, 100].
fn arb_percentage() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000).prop_map(|bp| Decimal::new(bp, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Discount plus final amount always reconstructs the original.
    #[test]
    fn prop_discount_plus_final_equals_original(
        original in arb_amount(),
        pct in arb_percentage(),
    ) {
        let breakdown = CouponEngine::compute(original, pct).unwrap();
        prop_assert_eq!(
            breakdown.discount_amount + breakdown.final_amount,
            original
        );
    }

    /// Commission is always exactly 5% of the gross amount.
    #[test]
    fn prop_commission_is_five_percent_of_gross(
        original in arb_amount(),
        pct in arb_percentage(),
    ) {
        let breakdown = CouponEngine::compute(original, pct).unwrap();
        prop_assert_eq!(breakdown.commission_amount, original * dec!(5) / dec!(100));
    }

    /// The final amount never goes negative and never exceeds the original.
    #[test]
    fn prop_final_amount_bounded(
        original in arb_amount(),
        pct in arb_percentage(),
    ) {
        let breakdown = CouponEngine::compute(original, pct).unwrap();
        prop_assert!(breakdown.final_amount >= Decimal::ZERO);
        prop_assert!(breakdown.final_amount <= original);
    }
}
