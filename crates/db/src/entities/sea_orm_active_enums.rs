//! Postgres enum types mapped by `SeaORM`.
//!
//! Conversions to and from the core domain enums live here so that
//! repositories and handlers only ever see the core types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Letter workflow status, mirrors `lexflow_core::letter::LetterStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "letter_status")]
#[serde(rename_all = "snake_case")]
pub enum LetterStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "submitted")]
    Submitted,
    #[sea_orm(string_value = "in_review")]
    InReview,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl From<lexflow_core::letter::LetterStatus> for LetterStatus {
    fn from(status: lexflow_core::letter::LetterStatus) -> Self {
        use lexflow_core::letter::LetterStatus as Core;
        match status {
            Core::Draft => Self::Draft,
            Core::Submitted => Self::Submitted,
            Core::InReview => Self::InReview,
            Core::Approved => Self::Approved,
            Core::Completed => Self::Completed,
            Core::Cancelled => Self::Cancelled,
        }
    }
}

impl From<LetterStatus> for lexflow_core::letter::LetterStatus {
    fn from(status: LetterStatus) -> Self {
        match status {
            LetterStatus::Draft => Self::Draft,
            LetterStatus::Submitted => Self::Submitted,
            LetterStatus::InReview => Self::InReview,
            LetterStatus::Approved => Self::Approved,
            LetterStatus::Completed => Self::Completed,
            LetterStatus::Cancelled => Self::Cancelled,
        }
    }
}

/// User role, mirrors `lexflow_shared::UserRole`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[sea_orm(string_value = "user")]
    User,
    #[sea_orm(string_value = "employee")]
    Employee,
    #[sea_orm(string_value = "admin")]
    Admin,
}

impl From<lexflow_shared::UserRole> for UserRole {
    fn from(role: lexflow_shared::UserRole) -> Self {
        use lexflow_shared::UserRole as Core;
        match role {
            Core::User => Self::User,
            Core::Employee => Self::Employee,
            Core::Admin => Self::Admin,
        }
    }
}

impl From<UserRole> for lexflow_shared::UserRole {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::User => Self::User,
            UserRole::Employee => Self::Employee,
            UserRole::Admin => Self::Admin,
        }
    }
}

/// Subscription status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "subscription_status")]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_status_round_trip() {
        for core in lexflow_core::letter::LetterStatus::all() {
            let db: LetterStatus = core.into();
            let back: lexflow_core::letter::LetterStatus = db.into();
            assert_eq!(core, back);
        }
    }

    #[test]
    fn test_user_role_round_trip() {
        for core in [
            lexflow_shared::UserRole::User,
            lexflow_shared::UserRole::Employee,
            lexflow_shared::UserRole::Admin,
        ] {
            let db: UserRole = core.into();
            let back: lexflow_shared::UserRole = db.into();
            assert_eq!(core, back);
        }
    }
}
