//! # Error Types
//!
//! Domain-specific error types for shopgrid-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopgrid-core errors (this file)                                       │
//! │  ├── CoreError        - Local precondition / cart failures              │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  shopgrid-api errors (separate crate)                                   │
//! │  └── ApiError         - REST boundary failures                          │
//! │                                                                         │
//! │  shopgrid-session errors (separate crate)                               │
//! │  └── SessionError     - Login / restore / storage failures              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ConsoleError → formatted message   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Local precondition failures are reported to the operator exactly like
//! backend rejections, so the two taxonomies deliberately read the same way.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Client-side precondition and cart failures.
///
/// These are caught before any network call is made; none of them mutate
/// cart or session state.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Submission attempted with no line items.
    #[error("Cart is empty. Add items to create a sale.")]
    EmptyCart,

    /// Submission attempted without choosing a shop.
    #[error("Please select a shop")]
    NoShopSelected,

    /// A shop-bound role has no shop assignment yet.
    #[error("You must have a shop assigned to perform this action. Please contact admin.")]
    ShopNotAssigned,

    /// The referenced product has no line in the cart.
    #[error("Product {0} is not in the cart")]
    ProductNotInCart(i64),

    /// Transfer source and destination are the same shop.
    #[error("Cannot transfer to the same shop.")]
    SameShopTransfer,

    /// Advisory stock check failed.
    ///
    /// The backend re-validates authoritatively; this exists only to give
    /// immediate feedback before the request is sent.
    #[error("Insufficient stock. Available: {available}, Requested: {requested}")]
    InsufficientStock { available: i64, requested: i64 },

    /// Validation error (wraps ValidationError).
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Mirrors the backend's field validators so that locally caught input
/// problems read the same as server rejections.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Quantity below the minimum of one.
    #[error("Quantity must be at least 1.")]
    QuantityTooSmall,

    /// Monetary field must not be negative.
    #[error("{field} cannot be negative.")]
    NegativeAmount { field: String },

    /// Value is not in the allowed set.
    #[error("{field} must be one of: {allowed}")]
    NotAllowed { field: String, allowed: String },

    /// Invalid format (unparseable amount, malformed date, ...).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precondition_messages_match_the_console_wording() {
        assert_eq!(
            CoreError::EmptyCart.to_string(),
            "Cart is empty. Add items to create a sale."
        );
        assert_eq!(
            CoreError::InsufficientStock {
                available: 3,
                requested: 5
            }
            .to_string(),
            "Insufficient stock. Available: 3, Requested: 5"
        );
    }

    #[test]
    fn validation_error_converts_to_core_error() {
        let err: CoreError = ValidationError::QuantityTooSmall.into();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(err.to_string(), "Quantity must be at least 1.");
    }
}
