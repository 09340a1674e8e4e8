//! Letter domain types for lifecycle management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use lexflow_shared::UserRole;

/// Letter status in the review workflow.
///
/// Letters progress through these states from request to delivery.
/// The valid transitions are:
/// - Draft → Submitted | Cancelled
/// - Submitted → InReview | Cancelled
/// - InReview → Approved | Submitted | Cancelled
/// - Approved → Completed | InReview
/// - Completed → (terminal)
/// - Cancelled → Submitted (reactivation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterStatus {
    /// Letter request is being drafted by the user.
    Draft,
    /// Letter has been submitted for drafting and review.
    Submitted,
    /// A draft exists and is under review.
    InReview,
    /// Draft has been approved and is ready to send.
    Approved,
    /// Letter has been sent to its recipient (immutable).
    Completed,
    /// Letter request has been cancelled.
    Cancelled,
}

impl LetterStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::InReview => "in_review",
            Self::Approved => "approved",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "submitted" => Some(Self::Submitted),
            "in_review" => Some(Self::InReview),
            "approved" => Some(Self::Approved),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Returns true if no further transitions leave this status.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns the statuses reachable from this one.
    #[must_use]
    pub const fn allowed_targets(&self) -> &'static [Self] {
        match self {
            Self::Draft => &[Self::Submitted, Self::Cancelled],
            Self::Submitted => &[Self::InReview, Self::Cancelled],
            Self::InReview => &[Self::Approved, Self::Submitted, Self::Cancelled],
            Self::Approved => &[Self::Completed, Self::InReview],
            Self::Completed => &[],
            Self::Cancelled => &[Self::Submitted],
        }
    }

    /// Returns all statuses, for exhaustive iteration in tests.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Draft,
            Self::Submitted,
            Self::InReview,
            Self::Approved,
            Self::Completed,
            Self::Cancelled,
        ]
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The caller attempting a transition, as seen by the engine.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    /// Caller identity.
    pub id: Uuid,
    /// Caller role.
    pub role: UserRole,
    /// Whether the caller owns the letter being transitioned.
    pub is_owner: bool,
}

impl Actor {
    /// Creates an actor.
    #[must_use]
    pub const fn new(id: Uuid, role: UserRole, is_owner: bool) -> Self {
        Self { id, role, is_owner }
    }
}

/// A validated transition, ready to persist, with audit data.
#[derive(Debug, Clone)]
pub struct TransitionPlan {
    /// Status before the transition.
    pub previous_status: LetterStatus,
    /// Status after the transition.
    pub new_status: LetterStatus,
    /// The user performing the transition.
    pub actor_id: Uuid,
    /// Optional note for the history entry.
    pub note: Option<String>,
    /// When the transition was planned.
    pub occurred_at: DateTime<Utc>,
    /// True when an admin bypassed the transition graph.
    pub forced: bool,
}

impl TransitionPlan {
    /// Returns true when the letter reaches its terminal state and
    /// `sent_at` must be stamped.
    #[must_use]
    pub fn completes(&self) -> bool {
        self.new_status == LetterStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_as_str() {
        assert_eq!(LetterStatus::Draft.as_str(), "draft");
        assert_eq!(LetterStatus::Submitted.as_str(), "submitted");
        assert_eq!(LetterStatus::InReview.as_str(), "in_review");
        assert_eq!(LetterStatus::Approved.as_str(), "approved");
        assert_eq!(LetterStatus::Completed.as_str(), "completed");
        assert_eq!(LetterStatus::Cancelled.as_str(), "cancelled");
    }

    #[test]
    fn test_status_parse() {
        for status in LetterStatus::all() {
            assert_eq!(LetterStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(LetterStatus::parse("IN_REVIEW"), Some(LetterStatus::InReview));
        assert_eq!(LetterStatus::parse("pending"), None);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(format!("{}", LetterStatus::InReview), "in_review");
        assert_eq!(format!("{}", LetterStatus::Completed), "completed");
    }

    #[test]
    fn test_completed_is_terminal() {
        assert!(LetterStatus::Completed.is_terminal());
        assert!(LetterStatus::Completed.allowed_targets().is_empty());
        for status in LetterStatus::all() {
            if status != LetterStatus::Completed {
                assert!(!status.is_terminal());
                assert!(!status.allowed_targets().is_empty());
            }
        }
    }

    #[test]
    fn test_cancelled_can_reactivate() {
        assert_eq!(
            LetterStatus::Cancelled.allowed_targets(),
            &[LetterStatus::Submitted]
        );
    }
}
