//! `SeaORM` Entity for the discount_codes table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "discount_codes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub percentage: Decimal,
    pub is_active: bool,
    pub usage_count: i32,
    /// The referring employee credited with commission and points.
    pub employee_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::EmployeeId",
        to = "super::users::Column::Id"
    )]
    Users,
    #[sea_orm(has_many = "super::discount_usages::Entity")]
    DiscountUsages,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::discount_usages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscountUsages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
