//! Drafting error types.

use thiserror::Error;

use lexflow_shared::AppError;

/// Errors from prompt construction.
#[derive(Debug, Error)]
pub enum DraftError {
    /// Neither input form supplied enough fields to build a prompt.
    #[error("A structured letter request or at least a title is required")]
    InsufficientInput,

    /// A required field was present but blank.
    #[error("Field '{0}' must not be blank")]
    BlankField(&'static str),
}

impl From<DraftError> for AppError {
    fn from(err: DraftError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_errors_map_to_validation() {
        let err: AppError = DraftError::InsufficientInput.into();
        assert_eq!(err.status_code(), 400);
        let err: AppError = DraftError::BlankField("title").into();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("title"));
    }
}
