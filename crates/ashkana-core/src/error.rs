//! # Error Types
//!
//! Domain-specific error types for ashkana-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ashkana-core errors (this file)                                        │
//! │  ├── CoreError        - Domain rule violations                          │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                  │
//! │  └── AppError         - CoreError ∪ terminal I/O failure                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → rendered to terminal    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every `CoreError` is recoverable: the enclosing selection or panel loop
//! reports it and continues. Nothing in the domain layer panics.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (entity id, requested quantity, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or rejected input.
/// They are rendered to the terminal verbatim and never abort the process.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Not enough stock to satisfy a requested quantity.
    ///
    /// ## When This Occurs
    /// - A checkout line requests more units than the first matching
    ///   catalog entity currently holds
    ///
    /// The selection loop reports this and continues; no stock moves and
    /// no order line is added.
    #[error("Not enough stock for item {id}: available {available}, requested {requested}")]
    InsufficientStock {
        id: i64,
        requested: i64,
        available: i64,
    },

    /// No entity with the given id exists in the collection searched.
    #[error("Invalid selection: {id}")]
    InvalidSelection { id: i64 },

    /// Input could not be interpreted where a specific value was expected.
    ///
    /// ## When This Occurs
    /// - Non-numeric text where an integer is expected
    /// - A payment method outside the known set
    #[error("Invalid input: {input}")]
    InvalidInput { input: String },

    /// The admin passphrase did not match.
    ///
    /// Exactly one attempt is allowed per panel entry; this error closes
    /// the panel without touching any state.
    #[error("Incorrect password")]
    Unauthorized,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when admin-entered values don't meet requirements. They are
/// raised before any catalog mutation happens, so a failed add leaves the
/// catalog untouched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., unparseable price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            id: 1,
            requested: 60,
            available: 50,
        };
        assert_eq!(
            err.to_string(),
            "Not enough stock for item 1: available 50, requested 60"
        );

        let err = CoreError::InvalidSelection { id: 42 };
        assert_eq!(err.to_string(), "Invalid selection: 42");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBeNonNegative {
            field: "stock".to_string(),
        };
        assert_eq!(err.to_string(), "stock must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
