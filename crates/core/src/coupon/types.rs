//! Coupon domain types.

use rust_decimal::Decimal;
use serde::Serialize;

/// Result of applying a discount code to an amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponBreakdown {
    /// Amount before discount.
    pub original_amount: Decimal,
    /// Discount percentage applied.
    pub percentage: Decimal,
    /// Amount subtracted from the original.
    pub discount_amount: Decimal,
    /// Amount actually charged.
    pub final_amount: Decimal,
    /// Commission credited against the original (gross) amount.
    pub commission_amount: Decimal,
}
