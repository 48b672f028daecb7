//! # Error Types
//!
//! Domain-specific error types for mesa-core.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Taxonomy                                  │
//! │                                                                         │
//! │  not-found (unknown table / menu item / order)                         │
//! │  └── NOT an error: silent no-op, engine methods return Option/()       │
//! │                                                                         │
//! │  validation (duplicate number, deleting an in-use table or a           │
//! │  referenced category)                                                  │
//! │  └── FloorError (this file) → warning toast in the app layer,          │
//! │      operation aborted                                                 │
//! │                                                                         │
//! │  persistence (store read/write failure)                                │
//! │  └── StoreError (mesa-store) → logged only, in-memory state stands     │
//! │                                                                         │
//! │  Nothing is fatal: there is no crash path for any of the above.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (table number, category name)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing warning message

use thiserror::Error;

// =============================================================================
// Floor Error
// =============================================================================

/// Floor engine rejections.
///
/// These represent admin operations that violate a business rule. The app
/// layer converts each one into a warning notification; the operation has
/// no effect on the collections.
#[derive(Debug, Error)]
pub enum FloorError {
    /// A table with this number already exists.
    #[error("table number {number} already exists")]
    DuplicateTableNumber { number: u32 },

    /// The table is reserved or occupied and cannot be deleted.
    #[error("table {number} is in use and cannot be deleted")]
    TableInUse { number: u32 },

    /// The category still has menu items attached.
    #[error("category '{name}' still has menu items and cannot be deleted")]
    CategoryInUse { name: String },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when admin input doesn't meet requirements.
/// Used for early validation before the engine mutates anything.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with FloorError.
pub type FloorResult<T> = Result<T, FloorError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FloorError::DuplicateTableNumber { number: 4 };
        assert_eq!(err.to_string(), "table number 4 already exists");

        let err = FloorError::CategoryInUse {
            name: "Croquetas".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "category 'Croquetas' still has menu items and cannot be deleted"
        );
    }

    #[test]
    fn test_validation_converts_to_floor_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let floor_err: FloorError = validation_err.into();
        assert!(matches!(floor_err, FloorError::Validation(_)));
    }
}
