//! Status-transition engine for the letter workflow.
//!
//! The engine is pure: it validates a requested transition against the
//! allowed-transition graph and the caller's role, and returns a
//! `TransitionPlan` for the persistence layer to apply.

use chrono::Utc;

use crate::letter::error::LetterError;
use crate::letter::types::{Actor, LetterStatus, TransitionPlan};

/// Stateless engine validating letter status transitions.
pub struct TransitionEngine;

impl TransitionEngine {
    /// Checks whether `to` is reachable from `from` along the graph.
    #[must_use]
    pub fn is_valid_transition(from: LetterStatus, to: LetterStatus) -> bool {
        from.allowed_targets().contains(&to)
    }

    /// Plans a transition of a letter to `requested`.
    ///
    /// Authorization: the actor must be an admin, an employee (privileged
    /// reviewer), or the letter's owner.
    ///
    /// Admins may force any transition, including out of `completed`. This
    /// is a deliberate escape hatch, not an oversight: support staff need a
    /// way to repair letters that were moved to the wrong state. A forced
    /// transition is marked on the plan so the history entry records it.
    ///
    /// # Errors
    ///
    /// * `LetterError::NotAuthorized` when the actor has no claim on the letter.
    /// * `LetterError::InvalidTransition` when the edge is absent and the
    ///   actor is not an admin.
    pub fn plan(
        current: LetterStatus,
        requested: LetterStatus,
        actor: Actor,
        note: Option<String>,
    ) -> Result<TransitionPlan, LetterError> {
        if !(actor.role.is_reviewer() || actor.is_owner) {
            return Err(LetterError::NotAuthorized { actor_id: actor.id });
        }

        let valid = Self::is_valid_transition(current, requested);
        if !valid && !actor.role.is_admin() {
            return Err(LetterError::InvalidTransition {
                from: current,
                to: requested,
            });
        }

        Ok(TransitionPlan {
            previous_status: current,
            new_status: requested,
            actor_id: actor.id,
            note,
            occurred_at: Utc::now(),
            forced: !valid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexflow_shared::UserRole;
    use rstest::rstest;
    use uuid::Uuid;

    fn owner() -> Actor {
        Actor::new(Uuid::new_v4(), UserRole::User, true)
    }

    fn admin() -> Actor {
        Actor::new(Uuid::new_v4(), UserRole::Admin, false)
    }

    #[rstest]
    #[case(LetterStatus::Draft, LetterStatus::Submitted)]
    #[case(LetterStatus::Draft, LetterStatus::Cancelled)]
    #[case(LetterStatus::Submitted, LetterStatus::InReview)]
    #[case(LetterStatus::Submitted, LetterStatus::Cancelled)]
    #[case(LetterStatus::InReview, LetterStatus::Approved)]
    #[case(LetterStatus::InReview, LetterStatus::Submitted)]
    #[case(LetterStatus::InReview, LetterStatus::Cancelled)]
    #[case(LetterStatus::Approved, LetterStatus::Completed)]
    #[case(LetterStatus::Approved, LetterStatus::InReview)]
    #[case(LetterStatus::Cancelled, LetterStatus::Submitted)]
    fn test_graph_edges_are_valid(#[case] from: LetterStatus, #[case] to: LetterStatus) {
        assert!(TransitionEngine::is_valid_transition(from, to));
    }

    #[rstest]
    #[case(LetterStatus::Draft, LetterStatus::Approved)]
    #[case(LetterStatus::Draft, LetterStatus::Completed)]
    #[case(LetterStatus::Submitted, LetterStatus::Approved)]
    #[case(LetterStatus::Completed, LetterStatus::Submitted)]
    #[case(LetterStatus::Completed, LetterStatus::Approved)]
    #[case(LetterStatus::Cancelled, LetterStatus::Approved)]
    fn test_missing_edges_are_invalid(#[case] from: LetterStatus, #[case] to: LetterStatus) {
        assert!(!TransitionEngine::is_valid_transition(from, to));
    }

    #[test]
    fn test_self_transition_is_not_an_edge() {
        for status in LetterStatus::all() {
            assert!(!TransitionEngine::is_valid_transition(status, status));
        }
    }

    #[test]
    fn test_owner_submitted_to_in_review_succeeds() {
        let actor = owner();
        let plan = TransitionEngine::plan(
            LetterStatus::Submitted,
            LetterStatus::InReview,
            actor,
            None,
        )
        .unwrap();
        assert_eq!(plan.previous_status, LetterStatus::Submitted);
        assert_eq!(plan.new_status, LetterStatus::InReview);
        assert_eq!(plan.actor_id, actor.id);
        assert!(!plan.forced);
        assert!(!plan.completes());
    }

    #[test]
    fn test_completed_is_terminal_for_non_admin_owner() {
        let result = TransitionEngine::plan(
            LetterStatus::Completed,
            LetterStatus::Approved,
            owner(),
            None,
        );
        assert!(matches!(
            result,
            Err(LetterError::InvalidTransition {
                from: LetterStatus::Completed,
                to: LetterStatus::Approved,
            })
        ));
    }

    #[test]
    fn test_admin_may_force_any_transition() {
        let plan = TransitionEngine::plan(
            LetterStatus::Completed,
            LetterStatus::Draft,
            admin(),
            Some("support fixup".to_string()),
        )
        .unwrap();
        assert_eq!(plan.new_status, LetterStatus::Draft);
        assert!(plan.forced);
    }

    #[test]
    fn test_admin_valid_edge_is_not_marked_forced() {
        let plan = TransitionEngine::plan(
            LetterStatus::Approved,
            LetterStatus::Completed,
            admin(),
            None,
        )
        .unwrap();
        assert!(!plan.forced);
        assert!(plan.completes());
    }

    #[test]
    fn test_stranger_is_rejected() {
        let stranger = Actor::new(Uuid::new_v4(), UserRole::User, false);
        let result = TransitionEngine::plan(
            LetterStatus::Submitted,
            LetterStatus::InReview,
            stranger,
            None,
        );
        assert!(matches!(result, Err(LetterError::NotAuthorized { .. })));
    }

    #[test]
    fn test_employee_may_review_without_ownership() {
        let reviewer = Actor::new(Uuid::new_v4(), UserRole::Employee, false);
        let plan = TransitionEngine::plan(
            LetterStatus::InReview,
            LetterStatus::Approved,
            reviewer,
            Some("looks good".to_string()),
        )
        .unwrap();
        assert_eq!(plan.new_status, LetterStatus::Approved);
        assert_eq!(plan.note.as_deref(), Some("looks good"));
    }

    #[test]
    fn test_employee_cannot_force_invalid_edge() {
        let reviewer = Actor::new(Uuid::new_v4(), UserRole::Employee, false);
        let result = TransitionEngine::plan(
            LetterStatus::Draft,
            LetterStatus::Completed,
            reviewer,
            None,
        );
        assert!(matches!(result, Err(LetterError::InvalidTransition { .. })));
    }

    #[test]
    fn test_completing_plan_stamps_sent_at() {
        let plan = TransitionEngine::plan(
            LetterStatus::Approved,
            LetterStatus::Completed,
            owner(),
            None,
        )
        .unwrap();
        assert!(plan.completes());
    }
}
