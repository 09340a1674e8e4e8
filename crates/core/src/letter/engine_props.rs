//! Property-based tests for the status-transition engine.

use proptest::prelude::*;
use uuid::Uuid;

use crate::letter::engine::TransitionEngine;
use crate::letter::error::LetterError;
use crate::letter::types::{Actor, LetterStatus};
use lexflow_shared::UserRole;

fn arb_status() -> impl Strategy<Value = LetterStatus> {
    prop_oneof![
        Just(LetterStatus::Draft),
        Just(LetterStatus::Submitted),
        Just(LetterStatus::InReview),
        Just(LetterStatus::Approved),
        Just(LetterStatus::Completed),
        Just(LetterStatus::Cancelled),
    ]
}

fn arb_uuid() -> impl Strategy<Value = Uuid> {
    any::<u128>().prop_map(Uuid::from_u128)
}

fn arb_non_admin_role() -> impl Strategy<Value = UserRole> {
    prop_oneof![Just(UserRole::User), Just(UserRole::Employee)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A non-admin transition succeeds exactly when the edge exists
    /// in the allowed-transition graph.
    #[test]
    fn prop_non_admin_follows_graph(
        from in arb_status(),
        to in arb_status(),
        actor_id in arb_uuid(),
        role in arb_non_admin_role(),
    ) {
        let actor = Actor::new(actor_id, role, true);
        let result = TransitionEngine::plan(from, to, actor, None);
        if TransitionEngine::is_valid_transition(from, to) {
            let plan = result.unwrap();
            prop_assert_eq!(plan.previous_status, from);
            prop_assert_eq!(plan.new_status, to);
            prop_assert!(!plan.forced);
        } else {
            prop_assert!(
                matches!(result, Err(LetterError::InvalidTransition { .. })),
                "expected InvalidTransition, got {:?}", result
            );
        }
    }

    /// Admins always succeed; the plan is marked forced exactly when
    /// the edge is missing from the graph.
    #[test]
    fn prop_admin_always_succeeds(
        from in arb_status(),
        to in arb_status(),
        actor_id in arb_uuid(),
    ) {
        let actor = Actor::new(actor_id, UserRole::Admin, false);
        let plan = TransitionEngine::plan(from, to, actor, None).unwrap();
        prop_assert_eq!(plan.new_status, to);
        prop_assert_eq!(plan.forced, !TransitionEngine::is_valid_transition(from, to));
    }

    /// A non-owner regular user is rejected before graph validation.
    #[test]
    fn prop_stranger_always_rejected(
        from in arb_status(),
        to in arb_status(),
        actor_id in arb_uuid(),
    ) {
        let actor = Actor::new(actor_id, UserRole::User, false);
        let result = TransitionEngine::plan(from, to, actor, None);
        prop_assert!(
            matches!(result, Err(LetterError::NotAuthorized { .. })),
            "expected NotAuthorized, got {:?}", result
        );
    }

    /// Nothing leads out of `completed` without the admin role.
    #[test]
    fn prop_completed_is_terminal_for_non_admins(
        to in arb_status(),
        actor_id in arb_uuid(),
        role in arb_non_admin_role(),
    ) {
        let actor = Actor::new(actor_id, role, true);
        let result = TransitionEngine::plan(LetterStatus::Completed, to, actor, None);
        prop_assert!(result.is_err());
    }

    /// The plan always carries the actor and note it was given.
    #[test]
    fn prop_plan_preserves_audit_fields(
        actor_id in arb_uuid(),
        note in proptest::option::of("[a-zA-Z0-9 ]{1,40}"),
    ) {
        let actor = Actor::new(actor_id, UserRole::User, true);
        let plan = TransitionEngine::plan(
            LetterStatus::Submitted,
            LetterStatus::InReview,
            actor,
            note.clone(),
        ).unwrap();
        prop_assert_eq!(plan.actor_id, actor_id);
        prop_assert_eq!(plan.note, note);
    }
}
