//! # Validation Module
//!
//! Local precondition checks, mirroring the backend's validators so that
//! input problems caught before a request read exactly like server
//! rejections.
//!
//! These checks are advisory: the backend re-validates everything
//! authoritatively, and a race between a local check and the submission is
//! always resolved by the backend's answer.

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a username: required, at most 150 characters.
pub fn validate_username(username: &str) -> ValidationResult<()> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ValidationError::Required {
            field: "username".to_string(),
        });
    }
    if username.len() > 150 {
        return Err(ValidationError::TooLong {
            field: "username".to_string(),
            max: 150,
        });
    }
    Ok(())
}

/// Validates a quantity field: must be at least 1.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 1 {
        return Err(ValidationError::QuantityTooSmall);
    }
    Ok(())
}

/// Validates a free-entry monetary field (discount, tax): non-negative.
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::NegativeAmount {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Transfer Precheck
// =============================================================================

/// Advisory precheck for a transfer request.
///
/// Rejects same-shop transfers and, when the source shop's stock level is
/// locally known, requests exceeding it. `available = None` means the stock
/// record was not found locally; the check passes and the backend decides.
pub fn precheck_transfer(
    from_shop: i64,
    to_shop: i64,
    quantity: i64,
    available: Option<i64>,
) -> CoreResult<()> {
    validate_quantity(quantity)?;

    if from_shop == to_shop {
        return Err(CoreError::SameShopTransfer);
    }

    if let Some(available) = available {
        if available < quantity {
            return Err(CoreError::InsufficientStock {
                available,
                requested: quantity,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rules() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("  ").is_err());
        assert!(validate_username(&"a".repeat(151)).is_err());
    }

    #[test]
    fn quantity_floor_is_one() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-2).is_err());
    }

    #[test]
    fn amounts_must_be_non_negative() {
        assert!(validate_amount("discount", Money::zero()).is_ok());
        assert!(validate_amount("discount", Money::from_cents(100)).is_ok());
        let err = validate_amount("tax", Money::from_cents(-1)).unwrap_err();
        assert_eq!(err.to_string(), "tax cannot be negative.");
    }

    #[test]
    fn transfer_precheck_rejects_same_shop() {
        assert!(matches!(
            precheck_transfer(1, 1, 5, None),
            Err(CoreError::SameShopTransfer)
        ));
    }

    #[test]
    fn transfer_precheck_is_advisory_on_stock() {
        // Known stock below the request: refuse locally with availability
        let err = precheck_transfer(1, 2, 5, Some(3)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Insufficient stock. Available: 3, Requested: 5"
        );

        // Unknown stock: pass and let the backend decide
        assert!(precheck_transfer(1, 2, 5, None).is_ok());
        assert!(precheck_transfer(1, 2, 5, Some(5)).is_ok());
    }
}
