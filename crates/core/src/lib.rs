//! Core business logic for Lexflow.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and calculations
//! live here.
//!
//! # Modules
//!
//! - `letter` - Letter lifecycle and the status-transition engine
//! - `draft` - Drafting prompt construction from letter requests
//! - `coupon` - Discount and commission arithmetic
//! - `notify` - Status-change notification templates

pub mod coupon;
pub mod draft;
pub mod letter;
pub mod notify;
