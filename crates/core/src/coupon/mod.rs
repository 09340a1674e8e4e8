//! Coupon and discount arithmetic for Lexflow.
//!
//! Pure computation of discount, final amount, and referral commission.
//! Code lookup and usage recording live in the database layer.
//!
//! # Modules
//!
//! - `types` - Coupon domain types (CouponBreakdown)
//! - `error` - Coupon-specific error types
//! - `service` - Discount and commission calculation

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::CouponError;
pub use service::CouponEngine;
pub use types::CouponBreakdown;
