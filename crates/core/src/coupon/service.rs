//! Discount and commission calculation.

use rust_decimal::Decimal;

use crate::coupon::error::CouponError;
use crate::coupon::types::CouponBreakdown;

/// Referral commission rate: a fixed 5% of the original (gross) amount.
///
/// Commission is deliberately computed on the pre-discount amount and is
/// independent of the code's percentage. A 50% code still earns its
/// referring employee the same commission as a 5% code.
const COMMISSION_PERCENT: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Stateless engine computing discount breakdowns.
pub struct CouponEngine;

impl CouponEngine {
    /// Computes the discount breakdown for an amount and percentage.
    ///
    /// `discount = original * percentage / 100`,
    /// `final = original - discount`,
    /// `commission = original * 5 / 100`.
    ///
    /// # Errors
    ///
    /// * `CouponError::NonPositiveAmount` when `original_amount <= 0`.
    /// * `CouponError::InvalidPercentage` when `percentage` is outside [0, 100].
    pub fn compute(
        original_amount: Decimal,
        percentage: Decimal,
    ) -> Result<CouponBreakdown, CouponError> {
        if original_amount <= Decimal::ZERO {
            return Err(CouponError::NonPositiveAmount(original_amount));
        }
        if percentage < Decimal::ZERO || percentage > ONE_HUNDRED {
            return Err(CouponError::InvalidPercentage(percentage));
        }

        let discount_amount = original_amount * percentage / ONE_HUNDRED;
        let final_amount = original_amount - discount_amount;
        let commission_amount = original_amount * COMMISSION_PERCENT / ONE_HUNDRED;

        Ok(CouponBreakdown {
            original_amount,
            percentage,
            discount_amount,
            final_amount,
            commission_amount,
        })
    }
}
