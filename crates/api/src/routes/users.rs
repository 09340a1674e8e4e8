//! User administration routes.

use axum::{Router, extract::State, routing::get};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    AppState,
    middleware::AuthUser,
    response::{ApiResult, ok},
};
use lexflow_db::UserRepository;
use lexflow_db::entities::users;
use lexflow_shared::{AppError, UserRole};

/// Creates the user routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/users", get(list_users))
}

/// User profile as exposed to administrators.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User ID.
    pub id: Uuid,
    /// Login email.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Assigned role.
    pub role: UserRole,
    /// Accumulated referral points.
    pub points: i32,
    /// Whether the account may sign in.
    pub is_active: bool,
    /// Registration timestamp.
    pub created_at: String,
}

impl From<users::Model> for UserProfile {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            role: user.role.into(),
            points: user.points,
            is_active: user.is_active,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// GET `/users` - List all user profiles (admin only).
async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Vec<UserProfile>> {
    if !auth.is_admin() {
        return Err(AppError::Forbidden("Admin role required".to_string()).into());
    }

    let repo = UserRepository::new((*state.db).clone());
    let users = repo
        .list_all()
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(ok(users.into_iter().map(UserProfile::from).collect()))
}
