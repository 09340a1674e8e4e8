//! `SeaORM` entity definitions.

pub mod discount_codes;
pub mod discount_usages;
pub mod letter_status_history;
pub mod letters;
pub mod sea_orm_active_enums;
pub mod subscriptions;
pub mod users;
