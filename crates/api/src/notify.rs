//! Best-effort notification dispatch on status changes.
//!
//! Composition comes from `lexflow_core::notify`; delivery runs in a
//! spawned task so it can never block or fail the transition that
//! triggered it.

use tracing::warn;

use crate::AppState;
use lexflow_core::letter::LetterStatus;
use lexflow_core::notify;
use lexflow_db::UserRepository;
use lexflow_db::entities::letters;

/// Notifies the letter's owner of a status change.
///
/// Every failure path (owner lookup, composition, delivery) is logged
/// and swallowed.
pub fn dispatch_status_change(
    state: &AppState,
    letter: &letters::Model,
    old: LetterStatus,
    new: LetterStatus,
) {
    let db = (*state.db).clone();
    let email_service = state.email_service.clone();
    let letter_id = letter.id;
    let owner_id = letter.user_id;
    let title = letter.title.clone();

    tokio::spawn(async move {
        let owner = match UserRepository::new(db).find_by_id(owner_id).await {
            Ok(Some(owner)) => owner,
            Ok(None) => {
                warn!(letter_id = %letter_id, "letter owner missing, skipping notification");
                return;
            }
            Err(e) => {
                warn!(letter_id = %letter_id, error = %e, "owner lookup failed, skipping notification");
                return;
            }
        };

        let message = notify::compose(&title, old, new);
        if let Err(e) = email_service
            .send_email(&owner.email, &message.subject, &message.body)
            .await
        {
            warn!(
                letter_id = %letter_id,
                error = %e,
                "status notification delivery failed"
            );
        }
    });
}
