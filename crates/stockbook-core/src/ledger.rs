//! # Ledger
//!
//! The owning store of products, sales and the movement log, and the only
//! place stock is allowed to change.
//!
//! ## Sale Recording
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    record_sale(code, qty, discount)                     │
//! │                                                                         │
//! │  1. find product by code ────────────► ProductNotFound, no change      │
//! │  2. validate qty / discount ─────────► Validation error, no change     │
//! │  3. Sale::new(snapshot) ─────────────► total overflow, no change       │
//! │  4. product.decrease_stock(qty) ─────► InsufficientStock, no change    │
//! │  5. sales.push(sale)                    steps 5-6 cannot fail, so      │
//! │  6. movements.push("Sale: ...")         stock and history move together │
//! │  7. return Receipt                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Append-Only
//! Products, sales and movements are never removed. Stock is the only value
//! that ever decreases.
//!
//! ## Concurrency
//! Every mutation takes `&mut self`. Callers that share a ledger across
//! threads must serialize access themselves (one owner, or a mutex around
//! the whole ledger); there is no internal locking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::config::LedgerConfig;
use crate::error::{CoreError, CoreResult};
use crate::money::{Discount, Money};
use crate::product::{canonical_name, Product, ProductCode, ProductDetails, StockLevel};
use crate::report::Report;
use crate::sale::{Receipt, Sale, SaleLine};
use crate::validation::{validate_discount_bps, validate_price_cents, validate_quantity};

pub const NO_PRODUCTS: &str = "No products registered.";
pub const NO_SALES: &str = "No sales registered.";
pub const NO_MOVEMENTS: &str = "No movements registered.";

const SALES_HEADING: &str = "=== Sales Report ===";
const MOVEMENTS_HEADING: &str = "=== Movement History ===";

// =============================================================================
// Movement Log
// =============================================================================

/// What moved stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    Sale,
    Restock,
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovementKind::Sale => write!(f, "Sale"),
            MovementKind::Restock => write!(f, "Restock"),
        }
    }
}

/// One entry of the stock audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub kind: MovementKind,
    pub product_code: ProductCode,
    /// Display-cased name at the time of the movement.
    pub product_name: String,
    pub quantity: i64,
    /// Stock level right after the movement.
    pub resulting_stock: i64,
    pub at: DateTime<Utc>,
}

/// `Sale: 3 units of Mouse - stock updated to 7.`
impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} units of {} - stock updated to {}.",
            self.kind, self.quantity, self.product_name, self.resulting_stock
        )
    }
}

// =============================================================================
// Ledger
// =============================================================================

/// In-memory inventory and sales ledger.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    config: LedgerConfig,
    products: Vec<Product>,
    sales: Vec<Sale>,
    movements: Vec<Movement>,
}

impl Ledger {
    /// Creates an empty ledger with default settings.
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    /// Creates an empty ledger with the given settings.
    pub fn with_config(config: LedgerConfig) -> Self {
        Ledger {
            config,
            products: Vec::new(),
            sales: Vec::new(),
            movements: Vec::new(),
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    /// Registers a product.
    ///
    /// ## Errors
    /// Code is checked first, then the canonical name; only the first
    /// collision is reported.
    /// - `DuplicateCode` when the code is taken
    /// - `DuplicateName` when the canonical name is taken
    pub fn add_product(&mut self, product: Product) -> CoreResult<()> {
        if self.code_exists(product.code()) {
            warn!(code = %product.code(), "Rejected product: duplicate code");
            return Err(CoreError::DuplicateCode {
                code: product.code(),
            });
        }

        if self.name_exists(product.name()) {
            warn!(name = %product.name(), "Rejected product: duplicate name");
            return Err(CoreError::DuplicateName {
                name: product.name().to_string(),
            });
        }

        debug!(code = %product.code(), name = %product.name(), stock = product.stock(), "Registered product");
        self.products.push(product);
        Ok(())
    }

    /// Linear scan by code; first match.
    pub fn find_by_code(&self, code: ProductCode) -> Option<&Product> {
        self.products.iter().find(|p| p.code() == code)
    }

    fn find_by_code_mut(&mut self, code: ProductCode) -> CoreResult<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| p.code() == code)
            .ok_or(CoreError::ProductNotFound { code })
    }

    /// Whether any product carries `code`.
    pub fn code_exists(&self, code: ProductCode) -> bool {
        self.find_by_code(code).is_some()
    }

    /// Whether any product's canonical name matches `name`, ignoring case and
    /// surrounding whitespace.
    pub fn name_exists(&self, name: &str) -> bool {
        let name = canonical_name(name);
        self.products.iter().any(|p| p.name() == name)
    }

    /// Products in registration order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    // -------------------------------------------------------------------------
    // Stock Movements
    // -------------------------------------------------------------------------

    /// Sells `quantity` units of product `code`.
    ///
    /// Either stock drops and one sale plus one movement are appended, or
    /// nothing changes.
    ///
    /// ## Errors
    /// Checked in this order, the first failure wins:
    /// - `ProductNotFound` when no product has `code`
    /// - `Validation` for a non-positive quantity, a discount above 100%, or
    ///   a total too large for [`Money`]
    /// - `InsufficientStock` when `quantity` exceeds the stock level
    pub fn record_sale(
        &mut self,
        code: ProductCode,
        quantity: i64,
        discount: Discount,
    ) -> CoreResult<Receipt> {
        let product = match self.find_by_code_mut(code) {
            Ok(product) => product,
            Err(err) => {
                warn!(code = %code, "Sale rejected: product not found");
                return Err(err);
            }
        };

        validate_quantity(quantity)?;
        validate_discount_bps(discount.bps())?;

        // Snapshot before the withdrawal so a failed total leaves stock alone.
        let sale = Sale::new(product, quantity, discount)?;

        let remaining = match product.decrease_stock(quantity) {
            Ok(remaining) => remaining,
            Err(err) => {
                warn!(code = %code, requested = quantity, available = product.stock(), "Sale rejected: insufficient stock");
                return Err(err);
            }
        };

        let movement = Movement {
            kind: MovementKind::Sale,
            product_code: code,
            product_name: product.display_name(),
            quantity,
            resulting_stock: remaining,
            at: sale.sold_at(),
        };

        debug!(
            sale_id = %sale.id(),
            code = %code,
            quantity,
            discount_bps = discount.bps(),
            total = %sale.total(),
            remaining,
            "Recorded sale"
        );

        let receipt = sale.receipt(&self.config.currency_symbol, self.config.timezone);
        self.sales.push(sale);
        self.movements.push(movement);
        Ok(receipt)
    }

    /// Adds `amount` units to product `code` and logs a restock movement.
    ///
    /// ## Returns
    /// The new stock level.
    pub fn restock(&mut self, code: ProductCode, amount: i64) -> CoreResult<i64> {
        let product = self.find_by_code_mut(code)?;
        let stock = product.increase_stock(amount)?;
        let movement = Movement {
            kind: MovementKind::Restock,
            product_code: code,
            product_name: product.display_name(),
            quantity: amount,
            resulting_stock: stock,
            at: Utc::now(),
        };

        debug!(code = %code, amount, stock, "Restocked product");
        self.movements.push(movement);
        Ok(stock)
    }

    /// Changes the unit price of product `code`. Recorded sales keep their
    /// totals.
    pub fn update_price(&mut self, code: ProductCode, price: Money) -> CoreResult<()> {
        validate_price_cents(price.cents())?;
        let product = self.find_by_code_mut(code)?;
        let old = product.price();
        product.set_price(price)?;

        debug!(code = %code, old = %old, new = %price, "Updated price");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Reports
    // -------------------------------------------------------------------------

    /// Full detail of every product, in registration order.
    pub fn list_products(&self) -> Report<ProductDetails> {
        let entries = self
            .products
            .iter()
            .map(|p| p.details(&self.config.currency_symbol))
            .collect();
        Report::new(NO_PRODUCTS, entries)
    }

    /// Name and stock of every product, in registration order.
    pub fn list_stock(&self) -> Report<StockLevel> {
        let entries = self.products.iter().map(Product::stock_level).collect();
        Report::new(NO_PRODUCTS, entries)
    }

    /// Every sale, oldest first.
    pub fn sales_report(&self) -> Report<SaleLine> {
        let entries = self
            .sales
            .iter()
            .map(|s| SaleLine(s.receipt(&self.config.currency_symbol, self.config.timezone)))
            .collect();
        Report::new(NO_SALES, entries).with_heading(SALES_HEADING)
    }

    /// Every movement, oldest first.
    pub fn movement_history(&self) -> Report<Movement> {
        Report::new(NO_MOVEMENTS, self.movements.clone()).with_heading(MOVEMENTS_HEADING)
    }

    /// Sales in the order they were recorded.
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Movements in the order they happened.
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::product::ProductDraft;
    use crate::TimestampZone;
    use proptest::prelude::*;

    fn product(name: &str, code: u32, stock: i64, price_cents: i64) -> Product {
        ProductDraft::new(name, ProductCode::new(code))
            .category("Peripherals")
            .stock(stock)
            .price(Money::from_cents(price_cents))
            .description("test item")
            .supplier("Acme")
            .build()
            .unwrap()
    }

    fn ledger_with_mouse() -> Ledger {
        let mut ledger = Ledger::with_config(LedgerConfig {
            timezone: TimestampZone::Utc,
            ..LedgerConfig::default()
        });
        ledger.add_product(product("mouse", 1, 10, 2500)).unwrap();
        ledger
    }

    #[test]
    fn test_add_product_rejects_duplicate_code() {
        let mut ledger = ledger_with_mouse();
        let err = ledger.add_product(product("keyboard", 1, 5, 100)).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateCode { code } if code == ProductCode::new(1)));
        assert_eq!(ledger.product_count(), 1);
    }

    #[test]
    fn test_add_product_rejects_duplicate_name_case_insensitive() {
        let mut ledger = ledger_with_mouse();
        let err = ledger.add_product(product("MOUSE", 2, 5, 100)).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateName { ref name } if name == "mouse"));
        assert_eq!(ledger.product_count(), 1);
    }

    #[test]
    fn test_code_checked_before_name() {
        let mut ledger = ledger_with_mouse();
        let err = ledger.add_product(product("Mouse", 1, 5, 100)).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateCode { .. }));
    }

    #[test]
    fn test_name_and_code_lookups() {
        let ledger = ledger_with_mouse();
        assert!(ledger.code_exists(ProductCode::new(1)));
        assert!(!ledger.code_exists(ProductCode::new(2)));
        assert!(ledger.name_exists(" MoUse "));
        assert!(!ledger.name_exists("keyboard"));
        assert!(ledger.find_by_code(ProductCode::new(2)).is_none());
    }

    #[test]
    fn test_record_sale_updates_stock_history_and_log() {
        let mut ledger = ledger_with_mouse();
        let receipt = ledger
            .record_sale(ProductCode::new(1), 3, Discount::from_bps(1000))
            .unwrap();

        assert_eq!(receipt.total.cents(), 6750);
        assert_eq!(receipt.product_name, "Mouse");
        assert_eq!(ledger.find_by_code(ProductCode::new(1)).unwrap().stock(), 7);
        assert_eq!(ledger.sales().len(), 1);
        assert_eq!(
            ledger.movements()[0].to_string(),
            "Sale: 3 units of Mouse - stock updated to 7."
        );
    }

    #[test]
    fn test_record_sale_unknown_code_changes_nothing() {
        let mut ledger = ledger_with_mouse();
        let err = ledger
            .record_sale(ProductCode::new(99), 1, Discount::none())
            .unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound { .. }));
        assert!(ledger.sales().is_empty());
        assert!(ledger.movements().is_empty());
    }

    #[test]
    fn test_record_sale_insufficient_stock_changes_nothing() {
        let mut ledger = ledger_with_mouse();
        let err = ledger
            .record_sale(ProductCode::new(1), 11, Discount::none())
            .unwrap_err();
        assert!(matches!(err, CoreError::InsufficientStock { available: 10, requested: 11, .. }));
        assert_eq!(ledger.find_by_code(ProductCode::new(1)).unwrap().stock(), 10);
        assert!(ledger.sales().is_empty());
        assert!(ledger.movements().is_empty());
    }

    #[test]
    fn test_record_sale_validates_arguments() {
        let mut ledger = ledger_with_mouse();
        assert!(matches!(
            ledger.record_sale(ProductCode::new(1), 0, Discount::none()),
            Err(CoreError::Validation(ValidationError::MustBePositive { .. }))
        ));
        assert!(matches!(
            ledger.record_sale(ProductCode::new(1), 1, Discount::from_bps(10_001)),
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert!(ledger.sales().is_empty());
    }

    #[test]
    fn test_unknown_code_reported_before_bad_arguments() {
        let mut ledger = ledger_with_mouse();
        assert!(matches!(
            ledger.record_sale(ProductCode::new(99), 0, Discount::none()),
            Err(CoreError::ProductNotFound { code }) if code == ProductCode::new(99)
        ));
        assert!(matches!(
            ledger.record_sale(ProductCode::new(99), 1, Discount::from_bps(20_000)),
            Err(CoreError::ProductNotFound { .. })
        ));
    }

    #[test]
    fn test_record_sale_has_no_quantity_cap() {
        let mut ledger = Ledger::new();
        ledger.add_product(product("bolt", 3, 5000, 10)).unwrap();

        let receipt = ledger
            .record_sale(ProductCode::new(3), 1000, Discount::none())
            .unwrap();
        assert_eq!(receipt.quantity, 1000);
        assert_eq!(receipt.total.cents(), 10_000);
        assert_eq!(ledger.find_by_code(ProductCode::new(3)).unwrap().stock(), 4000);

        // past the stock, the stock check decides
        assert!(matches!(
            ledger.record_sale(ProductCode::new(3), 4001, Discount::none()),
            Err(CoreError::InsufficientStock { available: 4000, requested: 4001, .. })
        ));
    }

    #[test]
    fn test_record_sale_total_overflow_changes_nothing() {
        let mut ledger = Ledger::new();
        ledger.add_product(product("gold bar", 7, 500, i64::MAX / 10)).unwrap();

        let err = ledger
            .record_sale(ProductCode::new(7), 100, Discount::none())
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { ref field, .. }) if field == "total"
        ));
        assert_eq!(ledger.find_by_code(ProductCode::new(7)).unwrap().stock(), 500);
        assert!(ledger.sales().is_empty());
        assert!(ledger.movements().is_empty());

        // a sale whose total fits still goes through
        assert!(ledger.record_sale(ProductCode::new(7), 9, Discount::none()).is_ok());
        assert_eq!(ledger.find_by_code(ProductCode::new(7)).unwrap().stock(), 491);
    }

    #[test]
    fn test_restock_logs_movement() {
        let mut ledger = ledger_with_mouse();
        assert_eq!(ledger.restock(ProductCode::new(1), 5).unwrap(), 15);
        assert_eq!(
            ledger.movement_history().to_string(),
            "=== Movement History ===\nRestock: 5 units of Mouse - stock updated to 15."
        );
        assert!(ledger.restock(ProductCode::new(1), 0).is_err());
        assert!(ledger.restock(ProductCode::new(7), 1).is_err());
        assert_eq!(ledger.movements().len(), 1);
    }

    #[test]
    fn test_update_price_keeps_past_totals() {
        let mut ledger = Ledger::new();
        ledger.add_product(product("cable", 5, 10, 1000)).unwrap();
        ledger.record_sale(ProductCode::new(5), 2, Discount::none()).unwrap();
        ledger.update_price(ProductCode::new(5), Money::from_cents(5000)).unwrap();

        assert_eq!(ledger.sales()[0].total().round_to_cents().cents(), 2000);
        assert_eq!(ledger.find_by_code(ProductCode::new(5)).unwrap().price().cents(), 5000);
        assert!(ledger.update_price(ProductCode::new(5), Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_empty_reports() {
        let ledger = Ledger::new();
        assert_eq!(ledger.list_products().to_string(), "No products registered.");
        assert_eq!(ledger.list_stock().to_string(), "No products registered.");
        assert_eq!(ledger.sales_report().to_string(), "No sales registered.");
        assert_eq!(ledger.movement_history().to_string(), "No movements registered.");
    }

    #[test]
    fn test_listings_in_insertion_order() {
        let mut ledger = ledger_with_mouse();
        ledger.add_product(product("keyboard", 2, 4, 8990)).unwrap();
        assert_eq!(
            ledger.list_stock().to_string(),
            "Product: Mouse, Stock: 10\nProduct: Keyboard, Stock: 4"
        );
        let listing = ledger.list_products();
        let names: Vec<_> = listing.entries().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Mouse", "Keyboard"]);
    }

    #[test]
    fn test_sales_report_lines() {
        let mut ledger = ledger_with_mouse();
        ledger.record_sale(ProductCode::new(1), 3, Discount::from_bps(1000)).unwrap();
        ledger.record_sale(ProductCode::new(1), 1, Discount::none()).unwrap();

        let report = ledger.sales_report();
        assert_eq!(report.len(), 2);
        let rendered = report.to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[0], "=== Sales Report ===");
        assert!(lines[1].starts_with("Product: Mouse, Quantity: 3, Discount: 10%, Total: R$67.50, Date: "));
        assert!(lines[2].starts_with("Product: Mouse, Quantity: 1, Discount: 0%, Total: R$25.00, Date: "));
    }

    proptest! {
        #[test]
        fn prop_record_sale_is_atomic(stock in 0i64..50, qty in 1i64..100) {
            let mut ledger = Ledger::new();
            ledger.add_product(product("widget", 1, stock, 199)).unwrap();

            let result = ledger.record_sale(ProductCode::new(1), qty, Discount::none());
            let now = ledger.find_by_code(ProductCode::new(1)).unwrap().stock();
            if qty <= stock {
                prop_assert!(result.is_ok());
                prop_assert_eq!(now, stock - qty);
                prop_assert_eq!(ledger.sales().len(), 1);
                prop_assert_eq!(ledger.movements().len(), 1);
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(now, stock);
                prop_assert!(ledger.sales().is_empty());
                prop_assert!(ledger.movements().is_empty());
            }
        }

        #[test]
        fn prop_fresh_code_and_name_grow_catalog_by_one(extra in 2u32..1000) {
            let mut ledger = ledger_with_mouse();
            ledger.add_product(product(&format!("item-{extra}"), extra, 1, 1)).unwrap();
            prop_assert_eq!(ledger.product_count(), 2);

            prop_assert!(ledger.add_product(product("other", extra, 1, 1)).is_err());
            let upper_code = format!("ITEM-{extra}");
            prop_assert!(ledger.add_product(product(&upper_code, extra + 1000, 1, 1)).is_err());
            prop_assert_eq!(ledger.product_count(), 2);
        }
    }
}
