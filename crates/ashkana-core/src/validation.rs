//! # Validation Module
//!
//! Input validation for admin catalog operations.
//!
//! Validators run before any catalog mutation, so a rejected add leaves the
//! catalog exactly as it was. Ids are deliberately NOT validated for
//! uniqueness; duplicate ids are a documented part of the catalog's
//! first-match semantics.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an item, drink, or set name.
///
/// ## Rules
/// - Must not be empty after trimming
///
/// ## Returns
/// The trimmed name.
pub fn validate_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(name.to_string())
}

/// Validates an initial stock quantity.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: an item can start sold out)
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
