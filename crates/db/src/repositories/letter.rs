//! Letter repository for workflow persistence.
//!
//! Applies transition plans produced by the core engine: one letter
//! update plus one append-only history row per accepted transition.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use tracing::warn;
use uuid::Uuid;

use lexflow_core::letter::{LetterError, TransitionPlan};

use crate::entities::{letter_status_history, letters, sea_orm_active_enums::LetterStatus};

/// Input for creating a letter from a drafting request.
#[derive(Debug, Clone, Default)]
pub struct CreateLetterInput {
    /// Owning user.
    pub user_id: Uuid,
    /// Matter title.
    pub title: String,
    /// Sender name from the structured request.
    pub sender_name: Option<String>,
    /// Sender address.
    pub sender_address: Option<String>,
    /// Attorney name.
    pub attorney_name: Option<String>,
    /// Recipient name.
    pub recipient_name: Option<String>,
    /// Subject of the matter.
    pub subject: Option<String>,
    /// Desired resolution.
    pub desired_resolution: Option<String>,
    /// Kind of letter.
    pub letter_type: Option<String>,
}

/// Letter repository for CRUD and workflow operations.
#[derive(Debug, Clone)]
pub struct LetterRepository {
    db: DatabaseConnection,
}

impl LetterRepository {
    /// Creates a new letter repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a letter by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<letters::Model>, DbErr> {
        letters::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists all letters, newest first (admin listing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_all(&self) -> Result<Vec<letters::Model>, DbErr> {
        letters::Entity::find()
            .order_by_desc(letters::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Creates a new letter in `submitted` status from a drafting request.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: CreateLetterInput) -> Result<letters::Model, DbErr> {
        let now = Utc::now().into();
        let letter = letters::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(input.user_id),
            title: Set(input.title),
            sender_name: Set(input.sender_name),
            sender_address: Set(input.sender_address),
            attorney_name: Set(input.attorney_name),
            recipient_name: Set(input.recipient_name),
            subject: Set(input.subject),
            desired_resolution: Set(input.desired_resolution),
            letter_type: Set(input.letter_type),
            ai_draft: Set(None),
            status: Set(LetterStatus::Submitted),
            assigned_reviewer_id: Set(None),
            notes: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            sent_at: Set(None),
        };

        letter.insert(&self.db).await
    }

    /// Stores the generated draft text on a letter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn save_draft(
        &self,
        letter: letters::Model,
        draft: &str,
    ) -> Result<letters::Model, DbErr> {
        let mut active: letters::ActiveModel = letter.into();
        active.ai_draft = Set(Some(draft.to_string()));
        active.updated_at = Set(Utc::now().into());
        active.update(&self.db).await
    }

    /// Applies a validated transition plan to a letter.
    ///
    /// Updates `status` and `updated_at`, stamps `sent_at` when the plan
    /// completes the letter, optionally assigns a reviewer, and appends
    /// one history row. The history append is best-effort: a failure is
    /// logged and does not roll back the transition (known gap, matching
    /// the single-writer-per-letter operational assumption).
    ///
    /// # Errors
    ///
    /// Returns `LetterError::Database` if the letter update fails.
    pub async fn apply_transition(
        &self,
        letter: letters::Model,
        plan: &TransitionPlan,
        assigned_reviewer_id: Option<Uuid>,
    ) -> Result<letters::Model, LetterError> {
        let letter_id = letter.id;
        let now = plan.occurred_at.into();

        let mut active: letters::ActiveModel = letter.into();
        active.status = Set(plan.new_status.into());
        active.updated_at = Set(now);
        if plan.completes() {
            active.sent_at = Set(Some(now));
        }
        if let Some(reviewer) = assigned_reviewer_id {
            active.assigned_reviewer_id = Set(Some(reviewer));
        }
        if let Some(note) = &plan.note {
            active.notes = Set(Some(note.clone()));
        }

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| LetterError::Database(e.to_string()))?;

        let history = letter_status_history::ActiveModel {
            id: Set(Uuid::new_v4()),
            letter_id: Set(letter_id),
            previous_status: Set(plan.previous_status.into()),
            new_status: Set(plan.new_status.into()),
            actor_id: Set(plan.actor_id),
            note: Set(plan.note.clone()),
            forced: Set(plan.forced),
            created_at: Set(now),
        };

        if let Err(e) = history.insert(&self.db).await {
            warn!(
                letter_id = %letter_id,
                error = %e,
                "failed to append status history entry"
            );
        }

        Ok(updated)
    }
}
