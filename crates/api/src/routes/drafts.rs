//! Draft generation route.
//!
//! Calls the text-generation API before any database mutation, so a
//! failed generation leaves no half-written letter behind.

use axum::{Router, extract::State, routing::post};
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
use lexflow_core::draft::{DraftInput, LegacyDraftRequest, StructuredLetterRequest, build_prompt};
use lexflow_core::letter::{Actor, LetterError, LetterStatus, TransitionEngine, TransitionPlan};
use lexflow_db::repositories::{CreateLetterInput, LetterRepository};
use lexflow_shared::AppError;

/// Creates the draft routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/drafts", post(generate_draft))
}

/// Request body for draft generation.
///
/// Accepts either a structured `letterRequest` object or the legacy
/// flattened `title`/`templateBody`/`tone`/`length` fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDraftRequest {
    /// Existing letter to attach the draft to. Absent means a new
    /// letter is created for the caller.
    #[serde(default)]
    pub letter_id: Option<Uuid>,
    /// Structured request fields.
    #[serde(default)]
    pub letter_request: Option<StructuredLetterRequest>,
    /// Legacy flattened fields.
    #[serde(flatten)]
    pub legacy: LegacyDraftRequest,
}

/// Response carrying the generated draft.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDraftResponse {
    /// The letter holding the draft.
    pub letter_id: Uuid,
    /// Generated draft text.
    pub ai_draft: String,
    /// Letter status after the draft was stored.
    pub status: LetterStatus,
}

/// Plans the move into review for a freshly drafted letter.
///
/// A fresh draft puts the letter under review; regeneration while
/// already in review just replaces the text, with no transition.
fn plan_review_transition(
    current: LetterStatus,
    actor: Actor,
) -> Result<Option<TransitionPlan>, LetterError> {
    if current == LetterStatus::InReview {
        return Ok(None);
    }
    TransitionEngine::plan(current, LetterStatus::InReview, actor, None).map(Some)
}

/// POST `/drafts` - Generate a draft and store it on a letter.
async fn generate_draft(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<GenerateDraftRequest>,
) -> ApiResult<GenerateDraftResponse> {
    let input = match payload.letter_request {
        Some(req) => DraftInput::Structured(req),
        None => DraftInput::Legacy(payload.legacy),
    };
    let prompt = build_prompt(&input)?;

    // Generation happens first: nothing is persisted on failure.
    let draft = state.draft_client.generate(&prompt).await?;

    let repo = LetterRepository::new((*state.db).clone());
    let letter = match payload.letter_id {
        Some(letter_id) => {
            let letter = repo
                .find_by_id(letter_id)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?
                .ok_or(LetterError::LetterNotFound(letter_id))?;
            if letter.user_id != auth.user_id() && !auth.role().is_reviewer() {
                return Err(AppError::Forbidden(
                    "You do not have access to this letter".to_string(),
                )
                .into());
            }
            letter
        }
        None => {
            let create = match &input {
                DraftInput::Structured(req) => CreateLetterInput {
                    user_id: auth.user_id(),
                    title: req
                        .title
                        .clone()
                        .unwrap_or_else(|| req.subject.clone()),
                    sender_name: Some(req.sender_name.clone()),
                    sender_address: req.sender_address.clone(),
                    attorney_name: req.attorney_name.clone(),
                    recipient_name: Some(req.recipient_name.clone()),
                    subject: Some(req.subject.clone()),
                    desired_resolution: req.desired_resolution.clone(),
                    letter_type: req.letter_type.clone(),
                },
                DraftInput::Legacy(req) => CreateLetterInput {
                    user_id: auth.user_id(),
                    title: req.title.clone().unwrap_or_default(),
                    ..CreateLetterInput::default()
                },
            };
            repo.create(create)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?
        }
    };

    // The review transition is planned before the draft is stored, so a
    // letter outside the workflow (completed, cancelled without
    // reactivation) is rejected without mutating anything.
    let current: LetterStatus = letter.status.into();
    let actor = Actor::new(auth.user_id(), auth.role(), letter.user_id == auth.user_id());
    let plan = plan_review_transition(current, actor)?;

    let letter = repo
        .save_draft(letter, &draft)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let letter = if let Some(plan) = plan {
        let updated = repo.apply_transition(letter, &plan, None).await?;
        dispatch_status_change(&state, &updated, plan.previous_status, plan.new_status);
        updated
    } else {
        letter
    };

    info!(
        letter_id = %letter.id,
        status = %LetterStatus::from(letter.status),
        draft_bytes = draft.len(),
        "draft generated"
    );

    Ok(ok(GenerateDraftResponse {
        letter_id: letter.id,
        ai_draft: draft,
        status: letter.status.into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_payload_parses() {
        let req: GenerateDraftRequest = serde_json::from_value(serde_json::json!({
            "letterRequest": {
                "senderName": "Jamie Doe",
                "recipientName": "Acme",
                "subject": "Unreturned deposit",
            }
        }))
        .unwrap();
        assert!(req.letter_request.is_some());
        assert!(req.letter_id.is_none());
    }

    #[test]
    fn test_legacy_flattened_payload_parses() {
        let req: GenerateDraftRequest = serde_json::from_value(serde_json::json!({
            "title": "Late invoice",
            "tone": "firm",
            "letterId": "00000000-0000-0000-0000-000000000009",
        }))
        .unwrap();
        assert!(req.letter_request.is_none());
        assert_eq!(req.legacy.title.as_deref(), Some("Late invoice"));
        assert_eq!(req.legacy.tone.as_deref(), Some("firm"));
        assert!(req.letter_id.is_some());
    }

    #[test]
    fn test_empty_payload_becomes_legacy_without_title() {
        // The handler rejects this through the prompt builder.
        let req: GenerateDraftRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        let result = build_prompt(&DraftInput::Legacy(req.legacy));
        assert!(result.is_err());
    }

    fn owner() -> Actor {
        Actor::new(uuid::Uuid::new_v4(), lexflow_shared::UserRole::User, true)
    }

    #[test]
    fn test_regeneration_rejected_for_completed_letter() {
        // Planning runs ahead of save_draft, so a sent letter keeps its
        // draft when the owner tries to regenerate.
        let result = plan_review_transition(LetterStatus::Completed, owner());
        assert!(matches!(
            result,
            Err(LetterError::InvalidTransition {
                from: LetterStatus::Completed,
                to: LetterStatus::InReview,
            })
        ));
    }

    #[test]
    fn test_regeneration_rejected_for_cancelled_letter() {
        let result = plan_review_transition(LetterStatus::Cancelled, owner());
        assert!(matches!(result, Err(LetterError::InvalidTransition { .. })));
    }

    #[test]
    fn test_regeneration_in_review_skips_transition() {
        let plan = plan_review_transition(LetterStatus::InReview, owner()).unwrap();
        assert!(plan.is_none());
    }

    #[test]
    fn test_fresh_draft_moves_letter_into_review() {
        let plan = plan_review_transition(LetterStatus::Submitted, owner())
            .unwrap()
            .unwrap();
        assert_eq!(plan.previous_status, LetterStatus::Submitted);
        assert_eq!(plan.new_status, LetterStatus::InReview);
        assert!(!plan.forced);
    }
}
