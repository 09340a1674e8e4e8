//! Letter lifecycle management for Lexflow.
//!
//! This module implements the letter status state machine: the fixed
//! allowed-transition graph, role-based authorization, and the audit
//! plan that persistence applies.
//!
//! # Modules
//!
//! - `types` - Letter domain types (LetterStatus, Actor, TransitionPlan)
//! - `error` - Letter-specific error types
//! - `engine` - State transition logic

pub mod engine;
pub mod error;
pub mod types;

#[cfg(test)]
mod engine_props;

pub use engine::TransitionEngine;
pub use error::LetterError;
pub use types::{Actor, LetterStatus, TransitionPlan};
