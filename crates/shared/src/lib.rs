//! Shared types, errors, and configuration for Lexflow.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error taxonomy
//! - Configuration management
//! - JWT claims and token validation (the identity gateway)
//! - Email delivery service (simulated by default)
//! - LLM client for letter drafting

pub mod auth;
pub mod config;
pub mod email;
pub mod error;
pub mod jwt;
pub mod llm;

pub use auth::{Claims, UserRole};
pub use config::AppConfig;
pub use email::{EmailError, EmailService};
pub use error::{AppError, AppResult};
pub use jwt::{JwtConfig, JwtError, JwtService};
pub use llm::{DraftClient, DraftClientError};
