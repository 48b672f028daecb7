//! # Validation Module
//!
//! Input validation utilities for admin operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, numeric)                              │
//! │  └── Immediate user feedback in the admin forms                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Floor engine (Rust)                                          │
//! │  ├── THIS MODULE: field validation                                     │
//! │  └── floor.rs: cross-collection rules (duplicate number,               │
//! │      in-use table, referenced category)                                │
//! │                                                                         │
//! │  Defense in depth: the engine never trusts the form                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mesa_core::validation::{validate_price_cents, validate_table_number};
//!
//! validate_table_number(7).unwrap();
//! validate_price_cents(650).unwrap();
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a menu item or category name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use mesa_core::validation::validate_name;
///
/// assert!(validate_name("Patatas Bravas").is_ok());
/// assert!(validate_name("").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a table number.
///
/// ## Rules
/// - Must be positive (> 0); uniqueness is checked against the floor
///   collection by the engine, not here
pub fn validate_table_number(number: u32) -> ValidationResult<()> {
    if number == 0 {
        return Err(ValidationError::MustBePositive {
            field: "table number".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (on-the-house items)
///
/// ## Example
/// ```rust
/// use mesa_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(650).is_ok());  // 6.50€
/// assert!(validate_price_cents(0).is_ok());    // free item
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Croquetas de Jamón").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_table_number() {
        assert!(validate_table_number(1).is_ok());
        assert!(validate_table_number(42).is_ok());
        assert!(validate_table_number(0).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(650).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }
}
