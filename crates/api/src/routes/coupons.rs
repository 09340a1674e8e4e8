//! Coupon redemption route.
//!
//! Checks run in a fixed order: authorization first, then input
//! validation, then code lookup. A caller probing someone else's
//! account gets a 403 before learning whether a code exists.

use axum::{Router, extract::State, routing::post};
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    AppState,
    middleware::AuthUser,
    response::{ApiResult, ok},
};
use lexflow_core::coupon::{CouponBreakdown, CouponEngine, CouponError};
use lexflow_db::repositories::{DiscountRepository, RedeemInput, UserRepository};
use lexflow_shared::AppError;

/// Creates the coupon routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/coupons/apply", post(apply_coupon))
}

/// Request body for coupon application.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyCouponRequest {
    /// The discount code, matched exactly and case-sensitively.
    pub coupon_code: String,
    /// Account the coupon is applied to. Must be the caller unless the
    /// caller is an admin.
    pub user_id: Uuid,
    /// Subscription plan being purchased.
    pub subscription_type: String,
    /// Gross amount before discount.
    pub original_amount: Decimal,
}

/// Response carrying the discount breakdown and the new subscription.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyCouponResponse {
    /// The code that was applied.
    pub code: String,
    /// Discount arithmetic.
    #[serde(flatten)]
    pub breakdown: CouponBreakdown,
    /// ID of the subscription created by the redemption.
    pub subscription_id: Uuid,
}

/// Validates the request fields ahead of the code lookup. A malformed
/// amount or blank field is a 400 even when the code does not exist.
fn validate(payload: &ApplyCouponRequest) -> Result<(), CouponError> {
    if payload.coupon_code.trim().is_empty() {
        return Err(CouponError::MissingField("couponCode"));
    }
    if payload.subscription_type.trim().is_empty() {
        return Err(CouponError::MissingField("subscriptionType"));
    }
    if payload.original_amount <= Decimal::ZERO {
        return Err(CouponError::NonPositiveAmount(payload.original_amount));
    }
    Ok(())
}

/// POST `/coupons/apply` - Redeem a discount code against a plan purchase.
async fn apply_coupon(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<ApplyCouponRequest>,
) -> ApiResult<ApplyCouponResponse> {
    if payload.user_id != auth.user_id() && !auth.is_admin() {
        return Err(CouponError::NotAuthorized.into());
    }

    validate(&payload)?;

    let repo = DiscountRepository::new((*state.db).clone());
    let code = repo
        .find_active_by_code(&payload.coupon_code)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or(CouponError::CodeNotFound)?;

    let breakdown = CouponEngine::compute(payload.original_amount, code.percentage)?;

    let employee_id = code.employee_id;
    let outcome = repo
        .redeem(RedeemInput {
            code,
            user_id: payload.user_id,
            plan_type: payload.subscription_type,
            breakdown: breakdown.clone(),
        })
        .await?;

    // Referral points for the code's employee are best-effort: the
    // redemption stands even if the credit fails.
    let users = UserRepository::new((*state.db).clone());
    if let Err(e) = users.increment_points(employee_id).await {
        warn!(
            employee_id = %employee_id,
            error = %e,
            "failed to credit referral points"
        );
    }

    info!(
        code = %payload.coupon_code,
        user_id = %payload.user_id,
        final_amount = %breakdown.final_amount,
        commission = %breakdown.commission_amount,
        "coupon applied"
    );

    Ok(ok(ApplyCouponResponse {
        code: payload.coupon_code,
        breakdown,
        subscription_id: outcome.subscription.id,
    }))
}
