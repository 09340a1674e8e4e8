//! Status-change notification composition.
//!
//! Builds the human-readable message sent to a letter's owner when its
//! status changes. Templates are keyed by the target status; unknown
//! combinations fall back to a generic message. Delivery is the email
//! service's concern and is always best-effort.

use crate::letter::LetterStatus;

/// A composed notification, ready for the email service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusNotification {
    /// Email subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

/// Composes the notification for a status change on a letter.
#[must_use]
pub fn compose(letter_title: &str, old: LetterStatus, new: LetterStatus) -> StatusNotification {
    let subject = format!("Update on your letter: {letter_title}");

    let detail = match new {
        LetterStatus::Submitted => {
            "Your letter request has been submitted and is waiting to be picked up for drafting."
        }
        LetterStatus::InReview => {
            "A draft of your letter is ready and is now being reviewed by our team."
        }
        LetterStatus::Approved => {
            "Your letter has been approved and will be sent to its recipient shortly."
        }
        LetterStatus::Completed => {
            "Your letter has been sent. A copy is available in your account."
        }
        LetterStatus::Cancelled => {
            "Your letter request has been cancelled. You can reactivate it at any time."
        }
        // No dedicated template; fall back to a generic message.
        LetterStatus::Draft => "The status of your letter has changed.",
    };

    let body = format!(
        "Hello,\n\n\
         The status of \"{letter_title}\" changed from {old} to {new}.\n\n\
         {detail}\n\n\
         Best regards,\n\
         The Lexflow Team"
    );

    StatusNotification { subject, body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(LetterStatus::Submitted, "waiting to be picked up")]
    #[case(LetterStatus::InReview, "being reviewed")]
    #[case(LetterStatus::Approved, "has been approved")]
    #[case(LetterStatus::Completed, "has been sent")]
    #[case(LetterStatus::Cancelled, "has been cancelled")]
    fn test_per_status_templates(#[case] new: LetterStatus, #[case] needle: &str) {
        let note = compose("Deposit dispute", LetterStatus::Draft, new);
        assert!(note.body.contains(needle), "missing {needle:?} in {}", note.body);
        assert!(note.subject.contains("Deposit dispute"));
    }

    #[test]
    fn test_unknown_target_falls_back_to_generic() {
        let note = compose("Deposit dispute", LetterStatus::Cancelled, LetterStatus::Draft);
        assert!(note.body.contains("The status of your letter has changed."));
    }

    #[test]
    fn test_body_names_both_statuses() {
        let note = compose("Matter", LetterStatus::Submitted, LetterStatus::InReview);
        assert!(note.body.contains("from submitted to in_review"));
    }
}
