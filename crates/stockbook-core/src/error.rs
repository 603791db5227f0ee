//! # Error Types
//!
//! Domain-specific error types for stockbook-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockbook-core errors (this file)                                     │
//! │  ├── CoreError        - Ledger rule violations                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  seed binary errors (apps/seed)                                        │
//! │  └── ConfigError      - Unparseable environment settings               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → shell prints message              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure here is recoverable: the ledger is left exactly as it was
//! and the caller may retry with corrected input.

use thiserror::Error;

use crate::product::ProductCode;

// =============================================================================
// Core Error
// =============================================================================

/// Ledger rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product in the catalog carries the requested code.
    ///
    /// ## When This Occurs
    /// - Selling against a code that was never registered
    /// - Restocking or repricing an unknown code
    #[error("Product not found: code {code}")]
    ProductNotFound { code: ProductCode },

    /// Requested withdrawal exceeds current stock.
    ///
    /// ## User Workflow
    /// ```text
    /// record_sale(code: 1, qty: 999)
    ///      │
    ///      ▼
    /// Check stock: available=7
    ///      │
    ///      ▼
    /// InsufficientStock { name: "mouse", available: 7, requested: 999 }
    ///      │
    ///      ▼
    /// No sale, no movement, stock stays 7
    /// ```
    #[error(
        "Insufficient stock for {name} (code {code}): available {available}, requested {requested}"
    )]
    InsufficientStock {
        code: ProductCode,
        name: String,
        available: i64,
        requested: i64,
    },

    /// Registration rejected: the code is already in the catalog.
    ///
    /// Checked before the name, so a product colliding on both reports this.
    #[error("A product with code {code} already exists")]
    DuplicateCode { code: ProductCode },

    /// Registration rejected: the canonical name is already in the catalog.
    #[error("A product named '{name}' already exists")]
    DuplicateName { name: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the product draft builder and by ledger operations before any
/// state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., a NaN percentage).
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
