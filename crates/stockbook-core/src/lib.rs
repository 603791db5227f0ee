//! # stockbook-core: Pure Ledger Logic for Stockbook
//!
//! This crate is the **heart** of Stockbook. It owns the product catalog,
//! stock mutation and sale recording, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockbook Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Shell (menu, prompts, seed driver)                │   │
//! │  │    parses input ──► calls Ledger ──► prints projections        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ typed primitives                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockbook-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │   sale    │  │  ledger   │  │   money   │  │   │
//! │  │   │  Product  │  │   Sale    │  │  Ledger   │  │   Money   │  │   │
//! │  │   │  Draft    │  │  Receipt  │  │ Movement  │  │ Discount  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • NO HIDDEN GLOBALS     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - Catalog entries, the draft builder and product projections
//! - [`sale`] - Immutable sale records with frozen totals, receipts
//! - [`ledger`] - The owning store: catalog, sale history, movement log
//! - [`money`] - Integer money, discounts in basis points, exact totals
//! - [`report`] - The "nothing registered" / entries container
//! - [`config`] - Ledger display settings
//! - [`error`] - Domain error types
//! - [`validation`] - Input rule checks
//!
//! ## Example Usage
//!
//! ```rust
//! use stockbook_core::{Discount, Ledger, Money, ProductCode, ProductDraft};
//!
//! let mut ledger = Ledger::new();
//! let mouse = ProductDraft::new("Mouse", ProductCode::new(1))
//!     .category("Peripherals")
//!     .stock(10)
//!     .price(Money::from_major_minor(25, 0))
//!     .description("Wireless mouse")
//!     .supplier("Acme")
//!     .build()
//!     .unwrap();
//! ledger.add_product(mouse).unwrap();
//!
//! let receipt = ledger
//!     .record_sale(ProductCode::new(1), 3, Discount::from_bps(1000))
//!     .unwrap();
//! assert_eq!(receipt.total.cents(), 6750);
//! assert_eq!(ledger.find_by_code(ProductCode::new(1)).unwrap().stock(), 7);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod ledger;
pub mod money;
pub mod product;
pub mod report;
pub mod sale;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::{LedgerConfig, TimestampZone};
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::{Ledger, Movement, MovementKind};
pub use money::{Discount, Money, PreciseAmount};
pub use product::{Product, ProductCode, ProductDetails, ProductDraft, StockLevel};
pub use report::Report;
pub use sale::{Receipt, Sale, SaleLine};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency prefix used in projections unless configured otherwise.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R$";

/// `DD/MM/YYYY HH:MM:SS`, the format for every timestamp shown to an operator.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
