//! Drafting prompt construction.
//!
//! Turns a structured letter request (or the legacy free-form payload)
//! into a deterministic natural-language instruction for the external
//! text-generation API. The HTTP call itself lives in
//! `lexflow_shared::llm`; this module is pure.

pub mod error;
pub mod prompt;

pub use error::DraftError;
pub use prompt::{DraftInput, LegacyDraftRequest, StructuredLetterRequest, build_prompt};
