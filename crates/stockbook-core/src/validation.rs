//! # Validation Module
//!
//! Input validation utilities for Stockbook.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell                                                        │
//! │  ├── Parses text into integers / decimals                              │
//! │  └── Re-prompts on garbage                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: ProductDraft::build / Ledger operations                      │
//! │  └── THIS MODULE: value rules (non-empty, ranges, positivity)          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Ledger                                                       │
//! │  └── Catalog rules (unique code, unique canonical name, stock)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockbook_core::validation::{validate_quantity, validate_required};
//!
//! assert_eq!(validate_required("category", "  Peripherals ").unwrap(), "Peripherals");
//! assert!(validate_quantity(5).is_ok());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a text field is non-empty after trimming.
///
/// ## Returns
/// The trimmed value.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(value.to_string())
}

/// Validates a product name and returns its canonical form.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Canonical form is the trimmed, lowercased name
///
/// ## Example
/// ```rust
/// use stockbook_core::validation::validate_product_name;
///
/// assert_eq!(validate_product_name("  Mouse ").unwrap(), "mouse");
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    validate_required("name", name).map(|name| name.to_lowercase())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock level for a new product.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (registered but not yet stocked)
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use stockbook_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1099).is_ok());
/// assert!(validate_price_cents(0).is_ok());
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

/// Validates a sale quantity.
///
/// ## Rules
/// - Must be positive (> 0); stock is the only upper bound
///
/// ## User Workflow
/// ```text
/// record_sale(code, qty)
///      │
///      ▼
/// look up product ──► ProductNotFound
///      │
///      ▼
/// validate_quantity(qty) ← THIS FUNCTION
///      │
///      ├── qty <= 0?  → Error: "quantity must be positive"
///      └── OK → withdraw stock
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock adjustment amount. Positive, no upper bound.
pub fn validate_adjustment(amount: i64) -> ValidationResult<()> {
    if amount <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_discount_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 10_000,
        });
    }

    Ok(())
}

/// Validates a discount percentage as entered by an operator.
pub fn validate_discount_percentage(pct: f64) -> ValidationResult<()> {
    if !pct.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "discount".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if !(0.0..=100.0).contains(&pct) {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 100,
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
    fn test_validate_required() {
        assert_eq!(validate_required("supplier", "Acme").unwrap(), "Acme");
        assert_eq!(validate_required("supplier", "  Acme  ").unwrap(), "Acme");

        assert!(validate_required("supplier", "").is_err());
        assert_eq!(
            validate_required("supplier", "   "),
            Err(ValidationError::Required {
                field: "supplier".to_string()
            })
        );
    }

    #[test]
    fn test_validate_product_name() {
        assert_eq!(validate_product_name("USB Cable").unwrap(), "usb cable");
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("\t\n").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1000).is_ok());
        assert!(validate_quantity(i64::MAX).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_stock_and_price() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(-1).is_err());

        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_adjustment() {
        assert!(validate_adjustment(1).is_ok());
        assert!(validate_adjustment(i64::MAX).is_ok());
        assert!(validate_adjustment(0).is_err());
        assert!(validate_adjustment(-5).is_err());
    }

    #[test]
    fn test_validate_discount() {
        assert!(validate_discount_bps(0).is_ok());
        assert!(validate_discount_bps(10_000).is_ok());
        assert!(validate_discount_bps(10_001).is_err());

        assert!(validate_discount_percentage(0.0).is_ok());
        assert!(validate_discount_percentage(100.0).is_ok());
        assert!(validate_discount_percentage(-0.5).is_err());
        assert!(validate_discount_percentage(f64::INFINITY).is_err());
    }
}
