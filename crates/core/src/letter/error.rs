//! Letter workflow error types.

use thiserror::Error;
use uuid::Uuid;

use crate::letter::types::LetterStatus;
use lexflow_shared::AppError;

/// Errors that can occur during letter workflow operations.
#[derive(Debug, Error)]
pub enum LetterError {
    /// Attempted a status transition not in the allowed graph.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: LetterStatus,
        /// The attempted target status.
        to: LetterStatus,
    },

    /// Caller is neither admin, reviewer, nor the letter's owner.
    #[error("User {actor_id} is not allowed to modify this letter")]
    NotAuthorized {
        /// The user who attempted the transition.
        actor_id: Uuid,
    },

    /// The requested status string is not a known status.
    #[error("Unknown letter status: {0}")]
    UnknownStatus(String),

    /// Letter not found.
    #[error("Letter {0} not found")]
    LetterNotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl From<LetterError> for AppError {
    fn from(err: LetterError) -> Self {
        match err {
            LetterError::InvalidTransition { .. } | LetterError::UnknownStatus(_) => {
                Self::Validation(err.to_string())
            }
            LetterError::NotAuthorized { .. } => Self::Forbidden(err.to_string()),
            LetterError::LetterNotFound(_) => Self::NotFound(err.to_string()),
            LetterError::Database(msg) => Self::Database(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_maps_to_validation() {
        let err: AppError = LetterError::InvalidTransition {
            from: LetterStatus::Completed,
            to: LetterStatus::Approved,
        }
        .into();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("completed"));
        assert!(err.to_string().contains("approved"));
    }

    #[test]
    fn test_not_authorized_maps_to_forbidden() {
        let err: AppError = LetterError::NotAuthorized {
            actor_id: Uuid::nil(),
        }
        .into();
        assert_eq!(err.status_code(), 403);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err: AppError = LetterError::LetterNotFound(Uuid::nil()).into();
        assert_eq!(err.status_code(), 404);
    }
}
