//! Letter workflow routes: status transitions, sending, admin listing.

use axum::{
    Router,
    extract::{Path, State},
    routing::{get, post},
};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{
    AppState,
    middleware::AuthUser,
    notify::dispatch_status_change,
    response::{ApiResult, ok},
};
use lexflow_core::letter::{Actor, LetterError, LetterStatus, TransitionEngine};
use lexflow_db::LetterRepository;
use lexflow_db::entities::letters;
use lexflow_shared::AppError;

/// Creates the letter routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/letters", get(list_letters))
        .route("/letters/{letter_id}/status", post(update_letter_status))
        .route("/letters/{letter_id}/send", post(send_letter))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for a status transition.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    /// Target status. `newStatus` is accepted as a legacy alias.
    #[serde(alias = "newStatus")]
    pub status: String,
    /// Optional note recorded on the history entry.
    pub notes: Option<String>,
    /// Optional reviewer assignment.
    pub assigned_lawyer_id: Option<Uuid>,
}

/// Request body for sending a finished letter.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendLetterRequest {
    /// Recipient email address.
    pub recipient_email: String,
    /// Optional subject override.
    pub subject: Option<String>,
}

/// Summary of a letter returned after mutations and in listings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterSummary {
    /// Letter ID.
    pub id: Uuid,
    /// Owner user ID.
    pub user_id: Uuid,
    /// Matter title.
    pub title: String,
    /// Current status.
    pub status: LetterStatus,
    /// Whether a draft has been generated.
    pub has_draft: bool,
    /// Assigned reviewer, if any.
    pub assigned_lawyer_id: Option<Uuid>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
    /// Delivery timestamp, set when the letter completes.
    pub sent_at: Option<String>,
}

impl From<letters::Model> for LetterSummary {
    fn from(letter: letters::Model) -> Self {
        Self {
            id: letter.id,
            user_id: letter.user_id,
            title: letter.title,
            status: letter.status.into(),
            has_draft: letter.ai_draft.is_some(),
            assigned_lawyer_id: letter.assigned_reviewer_id,
            notes: letter.notes,
            created_at: letter.created_at.to_rfc3339(),
            updated_at: letter.updated_at.to_rfc3339(),
            sent_at: letter.sent_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Response for a sent letter.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendLetterResponse {
    /// Letter ID.
    pub letter_id: Uuid,
    /// Where the letter was sent.
    pub recipient_email: String,
    /// Delivery timestamp.
    pub sent_at: Option<String>,
    /// True when delivery was simulated rather than relayed over SMTP.
    pub simulated: bool,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/letters` - List all letters (admin only).
async fn list_letters(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Vec<LetterSummary>> {
    if !auth.is_admin() {
        return Err(AppError::Forbidden("Admin role required".to_string()).into());
    }

    let repo = LetterRepository::new((*state.db).clone());
    let letters = repo
        .list_all()
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(ok(letters.into_iter().map(LetterSummary::from).collect()))
}

/// POST `/letters/{letter_id}/status` - Apply a status transition.
async fn update_letter_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(letter_id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> ApiResult<LetterSummary> {
    let requested = LetterStatus::parse(&payload.status)
        .ok_or(LetterError::UnknownStatus(payload.status.clone()))?;

    let repo = LetterRepository::new((*state.db).clone());
    let letter = repo
        .find_by_id(letter_id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or(LetterError::LetterNotFound(letter_id))?;

    let current: LetterStatus = letter.status.into();
    let actor = Actor::new(auth.user_id(), auth.role(), letter.user_id == auth.user_id());
    let plan = TransitionEngine::plan(current, requested, actor, payload.notes)?;

    let updated = repo
        .apply_transition(letter, &plan, payload.assigned_lawyer_id)
        .await?;

    info!(
        letter_id = %letter_id,
        from = %plan.previous_status,
        to = %plan.new_status,
        forced = plan.forced,
        "letter status updated"
    );

    dispatch_status_change(&state, &updated, plan.previous_status, plan.new_status);

    Ok(ok(updated.into()))
}

/// POST `/letters/{letter_id}/send` - Email the finished letter and
/// complete it.
///
/// The transition to `completed` is validated before the email goes out,
/// so an out-of-workflow letter is rejected without sending anything.
async fn send_letter(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(letter_id): Path<Uuid>,
    Json(payload): Json<SendLetterRequest>,
) -> ApiResult<SendLetterResponse> {
    if payload.recipient_email.trim().is_empty() {
        return Err(AppError::Validation("recipientEmail is required".to_string()).into());
    }

    let repo = LetterRepository::new((*state.db).clone());
    let letter = repo
        .find_by_id(letter_id)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or(LetterError::LetterNotFound(letter_id))?;

    let Some(draft) = letter.ai_draft.clone() else {
        return Err(AppError::Validation("Letter has no draft to send".to_string()).into());
    };

    let current: LetterStatus = letter.status.into();
    let actor = Actor::new(auth.user_id(), auth.role(), letter.user_id == auth.user_id());
    let plan = TransitionEngine::plan(current, LetterStatus::Completed, actor, None)?;

    let subject = payload
        .subject
        .clone()
        .unwrap_or_else(|| format!("Your letter: {}", letter.title));

    state
        .email_service
        .send_email(&payload.recipient_email, &subject, &draft)
        .await?;

    let updated = repo.apply_transition(letter, &plan, None).await?;

    info!(
        letter_id = %letter_id,
        recipient = %payload.recipient_email,
        simulated = state.email_service.is_simulated(),
        "letter sent"
    );

    dispatch_status_change(&state, &updated, plan.previous_status, plan.new_status);

    Ok(ok(SendLetterResponse {
        letter_id,
        recipient_email: payload.recipient_email,
        sent_at: updated.sent_at.map(|t| t.to_rfc3339()),
        simulated: state.email_service.is_simulated(),
    }))
}
