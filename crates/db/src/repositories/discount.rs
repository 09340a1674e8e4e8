//! Discount code repository.
//!
//! Lookup is a case-sensitive exact match on active codes. Redemption
//! writes the subscription, the usage record, and the usage counter in
//! one database transaction; the referral points credit is best-effort
//! and handled separately by `UserRepository::increment_points`.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
    sea_query::Expr,
};
use uuid::Uuid;

use lexflow_core::coupon::{CouponBreakdown, CouponError};

use crate::entities::{
    discount_codes, discount_usages, sea_orm_active_enums::SubscriptionStatus, subscriptions,
};

/// Input for recording a successful redemption.
#[derive(Debug, Clone)]
pub struct RedeemInput {
    /// The matched discount code.
    pub code: discount_codes::Model,
    /// The redeeming user.
    pub user_id: Uuid,
    /// Subscription plan being purchased.
    pub plan_type: String,
    /// Computed discount breakdown.
    pub breakdown: CouponBreakdown,
}

/// Rows created by a successful redemption.
#[derive(Debug, Clone)]
pub struct RedeemOutcome {
    /// The new subscription, charged the final amount.
    pub subscription: subscriptions::Model,
    /// The append-only usage record.
    pub usage: discount_usages::Model,
}

/// Discount code repository.
#[derive(Debug, Clone)]
pub struct DiscountRepository {
    db: DatabaseConnection,
}

impl DiscountRepository {
    /// Creates a new discount repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an active code by exact, case-sensitive match.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_active_by_code(
        &self,
        code: &str,
    ) -> Result<Option<discount_codes::Model>, DbErr> {
        discount_codes::Entity::find()
            .filter(discount_codes::Column::Code.eq(code))
            .filter(discount_codes::Column::IsActive.eq(true))
            .one(&self.db)
            .await
    }

    /// Records a redemption: subscription row, usage row, and usage
    /// counter increment, atomically. The counter increment is a single
    /// SQL expression, so concurrent redemptions cannot lose updates.
    ///
    /// # Errors
    ///
    /// Returns `CouponError::Database` if any write fails; in that case
    /// no row is persisted.
    pub async fn redeem(&self, input: RedeemInput) -> Result<RedeemOutcome, CouponError> {
        let now = Utc::now().into();
        let code_id = input.code.id;
        let employee_id = input.code.employee_id;
        let RedeemInput {
            user_id,
            plan_type,
            breakdown,
            ..
        } = input;

        let outcome = self
            .db
            .transaction::<_, RedeemOutcome, DbErr>(move |txn| {
                Box::pin(async move {
                    let subscription = subscriptions::ActiveModel {
                        id: Set(Uuid::new_v4()),
                        user_id: Set(user_id),
                        plan_type: Set(plan_type),
                        amount: Set(breakdown.final_amount),
                        discount_code_id: Set(Some(code_id)),
                        status: Set(SubscriptionStatus::Active),
                        created_at: Set(now),
                    }
                    .insert(txn)
                    .await?;

                    let usage = discount_usages::ActiveModel {
                        id: Set(Uuid::new_v4()),
                        discount_code_id: Set(code_id),
                        user_id: Set(user_id),
                        employee_id: Set(employee_id),
                        original_amount: Set(breakdown.original_amount),
                        discount_amount: Set(breakdown.discount_amount),
                        commission_amount: Set(breakdown.commission_amount),
                        created_at: Set(now),
                    }
                    .insert(txn)
                    .await?;

                    discount_codes::Entity::update_many()
                        .col_expr(
                            discount_codes::Column::UsageCount,
                            Expr::col(discount_codes::Column::UsageCount).add(1),
                        )
                        .filter(discount_codes::Column::Id.eq(code_id))
                        .exec(txn)
                        .await?;

                    Ok(RedeemOutcome { subscription, usage })
                })
            })
            .await
            .map_err(|e| CouponError::Database(e.to_string()))?;

        Ok(outcome)
    }

    /// Creates a discount code (seeding and employee onboarding).
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create_code(
        &self,
        code: &str,
        percentage: Decimal,
        employee_id: Uuid,
    ) -> Result<discount_codes::Model, DbErr> {
        discount_codes::ActiveModel {
            id: Set(Uuid::new_v4()),
            code: Set(code.to_string()),
            percentage: Set(percentage),
            is_active: Set(true),
            usage_count: Set(0),
            employee_id: Set(employee_id),
            created_at: Set(Utc::now().into()),
        }
        .insert(&self.db)
        .await
    }
}
