//! # Products
//!
//! Catalog entries, the validated draft builder and the two read-only
//! projections a shell prints.
//!
//! ## Product Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Product Lifecycle                                 │
//! │                                                                         │
//! │  1. DRAFT                                                              │
//! │     └── ProductDraft::new(name, code).category(..)...build()           │
//! │         └── name trimmed + lowercased (canonical)                      │
//! │                                                                         │
//! │  2. REGISTER                                                           │
//! │     └── Ledger::add_product() → unique code, unique canonical name     │
//! │                                                                         │
//! │  3. STOCK MOVES                                                        │
//! │     ├── increase_stock(n)  (restock)                                   │
//! │     └── decrease_stock(n)  (sale; fails if n > stock)                  │
//! │                                                                         │
//! │  Never deleted.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{
    validate_adjustment, validate_price_cents, validate_product_name, validate_required,
    validate_stock, ValidationResult,
};

// =============================================================================
// Product Code
// =============================================================================

/// The integer business key of a product, unique across the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductCode(u32);

impl ProductCode {
    #[inline]
    pub const fn new(code: u32) -> Self {
        ProductCode(code)
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Name Helpers
// =============================================================================

/// Canonical (case-insensitive) form of a product name.
pub fn canonical_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Display casing: first character uppercase, the rest lowercase.
///
/// ## Example
/// ```rust
/// use stockbook_core::product::display_name;
///
/// assert_eq!(display_name("usb cable"), "Usb cable");
/// assert_eq!(display_name("MOUSE"), "Mouse");
/// ```
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Fields are private: stock only moves through [`Product::increase_stock`]
/// and [`Product::decrease_stock`], and a product held by a
/// [`Ledger`](crate::Ledger) is only reachable through `&Product`.
///
/// Deserializing goes through [`ProductDraft::build`], so a product read
/// from JSON obeys the same rules as one built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductDraft")]
pub struct Product {
    /// Canonical (lowercase) name.
    name: String,
    code: ProductCode,
    category: String,
    stock: i64,
    price: Money,
    description: String,
    supplier: String,
}

impl Product {
    /// Canonical (lowercase) name, the uniqueness key.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name with display casing (`Mouse`).
    pub fn display_name(&self) -> String {
        display_name(&self.name)
    }

    #[inline]
    pub fn code(&self) -> ProductCode {
        self.code
    }

    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Current stock level, never negative.
    #[inline]
    pub fn stock(&self) -> i64 {
        self.stock
    }

    /// Current unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    /// Adds `amount` units to stock and returns the new level.
    ///
    /// ## Errors
    /// - `Validation(MustBePositive)` when `amount <= 0`
    /// - `Validation(OutOfRange)` when the level would overflow `i64`
    pub fn increase_stock(&mut self, amount: i64) -> CoreResult<i64> {
        validate_adjustment(amount)?;
        self.stock = self
            .stock
            .checked_add(amount)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "stock".to_string(),
                min: 0,
                max: i64::MAX,
            })?;
        Ok(self.stock)
    }

    /// Removes `amount` units from stock and returns the new level.
    ///
    /// ## Errors
    /// - `InsufficientStock` when `amount` exceeds current stock; stock is
    ///   left untouched
    /// - `Validation(MustBePositive)` when `amount <= 0`
    pub fn decrease_stock(&mut self, amount: i64) -> CoreResult<i64> {
        validate_adjustment(amount)?;
        if amount > self.stock {
            return Err(CoreError::InsufficientStock {
                code: self.code,
                name: self.name.clone(),
                available: self.stock,
                requested: amount,
            });
        }
        self.stock -= amount;
        Ok(self.stock)
    }

    /// Replaces the unit price. Sales already recorded keep their totals.
    pub fn set_price(&mut self, price: Money) -> ValidationResult<()> {
        validate_price_cents(price.cents())?;
        self.price = price;
        Ok(())
    }

    /// Full-detail projection.
    pub fn details(&self, currency_symbol: &str) -> ProductDetails {
        ProductDetails {
            name: self.display_name(),
            code: self.code,
            category: self.category.clone(),
            stock: self.stock,
            price: self.price,
            description: self.description.clone(),
            supplier: self.supplier.clone(),
            currency_symbol: currency_symbol.to_string(),
        }
    }

    /// Stock-only projection.
    pub fn stock_level(&self) -> StockLevel {
        StockLevel {
            name: self.display_name(),
            stock: self.stock,
        }
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// Builder that validates every field before a [`Product`] exists.
///
/// ## Example
/// ```rust
/// use stockbook_core::{Money, ProductCode, ProductDraft};
///
/// let product = ProductDraft::new("  Keyboard ", ProductCode::new(2))
///     .category("Peripherals")
///     .stock(4)
///     .price(Money::from_major_minor(89, 90))
///     .description("Mechanical keyboard")
///     .supplier("Acme")
///     .build()
///     .unwrap();
/// assert_eq!(product.name(), "keyboard");
///
/// // Missing supplier
/// assert!(ProductDraft::new("Cable", ProductCode::new(3))
///     .category("Cables")
///     .description("1m")
///     .build()
///     .is_err());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDraft {
    name: String,
    code: ProductCode,
    category: String,
    #[serde(default)]
    stock: i64,
    #[serde(default)]
    price: Money,
    description: String,
    supplier: String,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, code: ProductCode) -> Self {
        ProductDraft {
            name: name.into(),
            code,
            category: String::new(),
            stock: 0,
            price: Money::zero(),
            description: String::new(),
            supplier: String::new(),
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Initial stock. Defaults to zero.
    pub fn stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }

    /// Unit price. Defaults to zero.
    pub fn price(mut self, price: Money) -> Self {
        self.price = price;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = supplier.into();
        self
    }

    /// Validates and produces the product.
    ///
    /// ## Rules
    /// - name, category, description, supplier non-empty after trimming
    /// - stock >= 0, price >= 0
    pub fn build(self) -> ValidationResult<Product> {
        let name = validate_product_name(&self.name)?;
        let category = validate_required("category", &self.category)?;
        validate_stock(self.stock)?;
        validate_price_cents(self.price.cents())?;
        let description = validate_required("description", &self.description)?;
        let supplier = validate_required("supplier", &self.supplier)?;

        Ok(Product {
            name,
            code: self.code,
            category,
            stock: self.stock,
            price: self.price,
            description,
            supplier,
        })
    }
}

impl TryFrom<ProductDraft> for Product {
    type Error = ValidationError;

    fn try_from(draft: ProductDraft) -> Result<Self, Self::Error> {
        draft.build()
    }
}

// =============================================================================
// Projections
// =============================================================================

/// Everything about a product, as shown in the product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetails {
    /// Display-cased name.
    pub name: String,
    pub code: ProductCode,
    pub category: String,
    pub stock: i64,
    pub price: Money,
    pub description: String,
    pub supplier: String,
    #[serde(skip)]
    pub currency_symbol: String,
}

impl fmt::Display for ProductDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product: {}, Code: {}, Category: {}, Stock: {}, Price: {}{}, Description: {}, Supplier: {}",
            self.name,
            self.code,
            self.category,
            self.stock,
            self.currency_symbol,
            self.price,
            self.description,
            self.supplier
        )
    }
}

/// Name and stock only, as shown in the stock listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    /// Display-cased name.
    pub name: String,
    pub stock: i64,
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Product: {}, Stock: {}", self.name, self.stock)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
