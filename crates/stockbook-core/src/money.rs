//! # Money Module
//!
//! Provides the `Money`, `Discount` and `PreciseAmount` types for handling
//! monetary values without floating point.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents, Integer Basis Points                      │
//! │    price     → cents         (2500 = 25.00)                             │
//! │    discount  → basis points  (1000 = 10%)                               │
//! │    total     → cents × qty × (10000 − bps)                              │
//! │                = exact integer in 1/10000-cent units                    │
//! │                                                                         │
//! │  Rounding to cents happens ONLY when a total is displayed.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockbook_core::money::{Discount, Money, PreciseAmount};
//!
//! let price = Money::from_major_minor(25, 0); // 25.00
//! let total = PreciseAmount::of_sale(price, 3, Discount::from_bps(1000)).unwrap();
//! assert_eq!(total.round_to_cents().cents(), 6750); // 67.50
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::validation::{validate_discount_percentage, ValidationResult};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: validation rejects negative prices at the boundary
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **No symbol in Display**: the currency prefix is a ledger setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99);
    /// assert_eq!(price.cents(), 1099);
    ///
    /// let negative = Money::from_major_minor(-5, 50);
    /// assert_eq!(negative.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }
}

/// Shows the amount with two decimals and no currency symbol: `25.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Discount
// =============================================================================

/// A percentage discount represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10%, 1250 bps = 12.5%
///
/// Valid range is 0..=10000 (0% to 100%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Discount(u32);

impl Discount {
    /// Basis points in 100%.
    pub const FULL_BPS: u32 = 10_000;

    /// Creates a discount from basis points.
    ///
    /// Range is not checked here; the ledger validates before recording a
    /// sale.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Discount(bps)
    }

    /// Creates a discount from a percentage as typed by an operator.
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::money::Discount;
    ///
    /// assert_eq!(Discount::from_percentage(12.5).unwrap().bps(), 1250);
    /// assert!(Discount::from_percentage(120.0).is_err());
    /// assert!(Discount::from_percentage(-1.0).is_err());
    /// ```
    pub fn from_percentage(pct: f64) -> ValidationResult<Self> {
        validate_discount_percentage(pct)?;
        Ok(Discount((pct * 100.0).round() as u32))
    }

    /// No discount.
    #[inline]
    pub const fn none() -> Self {
        Discount(0)
    }

    /// Returns the discount in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

/// Shows the percentage without trailing zeros: `10%`, `12.5%`, `0.25%`.
impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{}%", whole)
        } else if frac % 10 == 0 {
            write!(f, "{}.{}%", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}%", whole, frac)
        }
    }
}

// =============================================================================
// Precise Amount
// =============================================================================

/// An exact, non-negative sale total in units of 1/10000 cent.
///
/// A sale total is `cents × quantity × (10000 − bps)`, which is always an
/// integer in these units, so the stored total never loses precision. The
/// cent-rounded value used for display is computed once at construction, and
/// construction fails when that value does not fit in [`Money`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PreciseAmount {
    units: i128,
    rounded: Money,
}

impl PreciseAmount {
    /// Sub-units per cent.
    pub const UNITS_PER_CENT: i128 = 10_000;

    /// Computes `price × quantity × (1 − discount/100)` exactly.
    ///
    /// ## Errors
    /// `OutOfRange` on `total` when the result, rounded to cents, exceeds
    /// `i64::MAX` cents.
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::money::{Discount, Money, PreciseAmount};
    ///
    /// // 0.99 × 1 at 12.5% off = 0.86625, kept exactly
    /// let total = PreciseAmount::of_sale(Money::from_cents(99), 1, Discount::from_bps(1250)).unwrap();
    /// assert_eq!(total.units(), 866_250);
    /// assert_eq!(total.round_to_cents().cents(), 87);
    ///
    /// assert!(PreciseAmount::of_sale(Money::from_cents(i64::MAX), 2, Discount::none()).is_err());
    /// ```
    pub fn of_sale(unit_price: Money, quantity: i64, discount: Discount) -> ValidationResult<Self> {
        let out_of_range = || ValidationError::OutOfRange {
            field: "total".to_string(),
            min: 0,
            max: i64::MAX,
        };

        let keep_bps = Discount::FULL_BPS.saturating_sub(discount.bps()) as i128;
        let units = (unit_price.cents() as i128)
            .checked_mul(quantity as i128)
            .and_then(|gross| gross.checked_mul(keep_bps))
            .filter(|units| *units >= 0)
            .ok_or_else(out_of_range)?;

        let half_up = (units % Self::UNITS_PER_CENT >= Self::UNITS_PER_CENT / 2) as i128;
        let cents = units / Self::UNITS_PER_CENT + half_up;
        let cents = i64::try_from(cents).map_err(|_| out_of_range())?;

        Ok(PreciseAmount {
            units,
            rounded: Money::from_cents(cents),
        })
    }

    /// Raw value in 1/10000-cent units.
    #[inline]
    pub const fn units(&self) -> i128 {
        self.units
    }

    /// The value rounded half up to whole cents.
    #[inline]
    pub const fn round_to_cents(&self) -> Money {
        self.rounded
    }
}

/// Displays the cent-rounded value: `67.50`.
impl fmt::Display for PreciseAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.rounded.fmt(f)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
