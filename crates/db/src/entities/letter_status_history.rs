//! `SeaORM` Entity for the letter_status_history table.
//!
//! Append-only audit log: exactly one row per accepted transition,
//! never mutated after creation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::LetterStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "letter_status_history")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub letter_id: Uuid,
    pub previous_status: LetterStatus,
    pub new_status: LetterStatus,
    pub actor_id: Uuid,
    pub note: Option<String>,
    /// True when an admin bypassed the transition graph.
    pub forced: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::letters::Entity",
        from = "Column::LetterId",
        to = "super::letters::Column::Id"
    )]
    Letters,
}

impl Related<super::letters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Letters.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
