//! `SeaORM` Entity for the discount_usages table.
//!
//! Append-only record of every successful coupon redemption.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "discount_usages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub discount_code_id: Uuid,
    pub user_id: Uuid,
    pub employee_id: Uuid,
    pub original_amount: Decimal,
    pub discount_amount: Decimal,
    pub commission_amount: Decimal,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::discount_codes::Entity",
        from = "Column::DiscountCodeId",
        to = "super::discount_codes::Column::Id"
    )]
    DiscountCodes,
}

impl Related<super::discount_codes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscountCodes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
