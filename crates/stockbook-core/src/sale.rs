//! # Sales
//!
//! Immutable sale records and their projections.
//!
//! ## Snapshot Pattern
//! A sale copies the product's code, name and unit price at construction and
//! computes its total once. Repricing the product afterwards does not touch
//! recorded sales.
//!
//! ```text
//! Product { price: 10.00 } ──► Sale::new(qty 2) ──► total 20.00 (frozen)
//!        │
//!        ▼
//! set_price(50.00)                                  total still 20.00
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::config::TimestampZone;
use crate::error::CoreResult;
use crate::money::{Discount, Money, PreciseAmount};
use crate::product::{display_name, Product, ProductCode};

// =============================================================================
// Sale
// =============================================================================

/// One recorded stock withdrawal with a frozen total.
///
/// Sales are only built from a [`Product`], so there is no `Deserialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sale {
    id: Uuid,
    /// Code at time of sale (frozen).
    product_code: ProductCode,
    /// Canonical name at time of sale (frozen).
    product_name: String,
    /// Unit price at time of sale (frozen).
    unit_price: Money,
    quantity: i64,
    discount: Discount,
    /// `unit_price × quantity × (1 − discount)`, exact.
    total: PreciseAmount,
    sold_at: DateTime<Utc>,
}

impl Sale {
    /// Snapshots `product` and computes the total, timestamped now.
    ///
    /// ## Errors
    /// `Validation(OutOfRange)` when the total does not fit in [`Money`].
    pub fn new(product: &Product, quantity: i64, discount: Discount) -> CoreResult<Self> {
        Self::new_at(product, quantity, discount, Utc::now())
    }

    /// Same as [`Sale::new`] with an explicit timestamp.
    pub fn new_at(
        product: &Product,
        quantity: i64,
        discount: Discount,
        sold_at: DateTime<Utc>,
    ) -> CoreResult<Self> {
        let unit_price = product.price();
        let total = PreciseAmount::of_sale(unit_price, quantity, discount)?;

        Ok(Sale {
            id: Uuid::new_v4(),
            product_code: product.code(),
            product_name: product.name().to_string(),
            unit_price,
            quantity,
            discount,
            total,
            sold_at,
        })
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn product_code(&self) -> ProductCode {
        self.product_code
    }

    /// Canonical product name captured at sale time.
    #[inline]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    #[inline]
    pub fn discount(&self) -> Discount {
        self.discount
    }

    /// The exact total. Use [`PreciseAmount::round_to_cents`] for display.
    #[inline]
    pub fn total(&self) -> PreciseAmount {
        self.total
    }

    #[inline]
    pub fn sold_at(&self) -> DateTime<Utc> {
        self.sold_at
    }

    /// Receipt projection, timestamp rendered in `zone`.
    pub fn receipt(&self, currency_symbol: &str, zone: TimestampZone) -> Receipt {
        Receipt {
            sale_id: self.id,
            product_name: display_name(&self.product_name),
            quantity: self.quantity,
            discount: self.discount,
            total: self.total.round_to_cents(),
            timestamp: zone.format(self.sold_at),
            currency_symbol: currency_symbol.to_string(),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// What an operator sees after a sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub sale_id: Uuid,
    /// Display-cased name.
    pub product_name: String,
    pub quantity: i64,
    pub discount: Discount,
    /// Total rounded to cents. The sale keeps the exact value.
    pub total: Money,
    /// `DD/MM/YYYY HH:MM:SS`
    pub timestamp: String,
    #[serde(skip)]
    pub currency_symbol: String,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Sale Receipt ===")?;
        writeln!(f, "Product: {}", self.product_name)?;
        writeln!(f, "Quantity: {}", self.quantity)?;
        writeln!(f, "Discount: {}", self.discount)?;
        writeln!(f, "Total: {}{}", self.currency_symbol, self.total)?;
        write!(f, "Date: {}", self.timestamp)
    }
}

/// One row of the sales report. Same data as a [`Receipt`], on one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleLine(pub Receipt);

impl fmt::Display for SaleLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.0;
        write!(
            f,
            "Product: {}, Quantity: {}, Discount: {}, Total: {}{}, Date: {}",
            r.product_name, r.quantity, r.discount, r.currency_symbol, r.total, r.timestamp
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
