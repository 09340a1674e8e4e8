//! Coupon error types.

use rust_decimal::Decimal;
use thiserror::Error;

use lexflow_shared::AppError;

/// Errors that can occur during coupon operations.
#[derive(Debug, Error)]
pub enum CouponError {
    /// The amount to discount must be strictly positive.
    #[error("Original amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),

    /// The code's percentage is outside [0, 100].
    #[error("Discount percentage must be between 0 and 100, got {0}")]
    InvalidPercentage(Decimal),

    /// A required field is missing or blank.
    #[error("Field '{0}' is required")]
    MissingField(&'static str),

    /// No active code matches the given string.
    #[error("Discount code not found or inactive")]
    CodeNotFound,

    /// Caller may only redeem codes for their own account.
    #[error("Cannot apply a coupon on behalf of another user")]
    NotAuthorized,

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl From<CouponError> for AppError {
    fn from(err: CouponError) -> Self {
        match err {
            CouponError::NonPositiveAmount(_)
            | CouponError::InvalidPercentage(_)
            | CouponError::MissingField(_) => Self::Validation(err.to_string()),
            CouponError::CodeNotFound => Self::NotFound(err.to_string()),
            CouponError::NotAuthorized => Self::Forbidden(err.to_string()),
            CouponError::Database(msg) => Self::Database(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_status_mapping() {
        let err: AppError = CouponError::NonPositiveAmount(dec!(0)).into();
        assert_eq!(err.status_code(), 400);
        let err: AppError = CouponError::CodeNotFound.into();
        assert_eq!(err.status_code(), 404);
        let err: AppError = CouponError::NotAuthorized.into();
        assert_eq!(err.status_code(), 403);
        let err: AppError = CouponError::Database("oops".into()).into();
        assert_eq!(err.status_code(), 500);
    }
}
