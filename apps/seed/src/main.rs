//! # Stockbook Seed Session
//!
//! Builds a ledger, registers generated products, runs a scripted set of
//! sales and prints every report.
//!
//! ## Usage
//! ```bash
//! # Default: 5 products, R$, local time
//! cargo run -p stockbook-seed
//!
//! # Custom
//! STOCKBOOK_SEED_COUNT=12 STOCKBOOK_CURRENCY='$' STOCKBOOK_TIMEZONE=utc \
//!     RUST_LOG=stockbook_core=debug cargo run -p stockbook-seed
//! ```
//!
//! ## Generated Products
//! Each product has:
//! - Code: `1..=count`
//! - Name from the category tables below, suffixed on wrap-around so names
//!   stay unique
//! - Price: 4.90 - 94.90
//! - Stock: 3 - 42

mod config;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use stockbook_core::{Discount, Ledger, Money, ProductCode, ProductDraft};

use crate::config::SeedConfig;

/// Product categories for realistic seed data.
const CATEGORIES: &[(&str, &str, &[&str])] = &[
    (
        "Peripherals",
        "Acme Hardware",
        &["Mouse", "Keyboard", "Webcam", "Headset", "Mousepad"],
    ),
    (
        "Cables",
        "Linkworks",
        &["Usb cable", "Hdmi cable", "Ethernet cable", "Power strip"],
    ),
    (
        "Storage",
        "Datavault",
        &["Pen drive", "External disk", "Sd card", "Ssd"],
    ),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = SeedConfig::load()?;
    info!(
        currency = %config.ledger.currency_symbol,
        timezone = %config.ledger.timezone,
        seed_count = config.seed_count,
        "Starting seed session"
    );

    let mut ledger = Ledger::with_config(config.ledger.clone());

    for draft in generate_drafts(config.seed_count) {
        let product = draft.build()?;
        if let Err(e) = ledger.add_product(product) {
            warn!(error = %e, "Skipping product");
        }
    }
    info!(count = ledger.product_count(), "Catalog seeded");

    run_script(&mut ledger);

    println!("{}", ledger.list_products());
    println!();
    println!("{}", ledger.list_stock());
    println!();
    println!("{}", ledger.sales_report());
    println!();
    println!("{}", ledger.movement_history());

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockbook_core=trace` - Show trace for the ledger only
/// - Default: INFO, with DEBUG for stockbook crates
///
/// Logs go to stderr so stdout carries only the reports.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockbook_core=debug,stockbook_seed=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Deterministic product drafts, codes `1..=count`.
fn generate_drafts(count: usize) -> Vec<ProductDraft> {
    let pool: Vec<(&str, &str, &str)> = CATEGORIES
        .iter()
        .flat_map(|(category, supplier, names)| {
            names.iter().map(move |name| (*category, *supplier, *name))
        })
        .collect();

    (0..count)
        .map(|i| {
            let (category, supplier, base) = pool[i % pool.len()];
            let round = i / pool.len();
            let name = if round == 0 {
                base.to_string()
            } else {
                format!("{} {}", base, round + 1)
            };

            ProductDraft::new(name.as_str(), ProductCode::new(i as u32 + 1))
                .category(category)
                .stock(3 + (i as i64 * 7) % 40)
                .price(Money::from_major_minor(4 + (i as i64 * 13) % 91, 90))
                .description(format!("{} from the {} range", name, category.to_lowercase()))
                .supplier(supplier)
        })
        .collect()
}

/// A short session exercising every outcome the ledger reports.
fn run_script(ledger: &mut Ledger) {
    let first = ProductCode::new(1);

    let attempts = [
        (first, 3, Discount::from_bps(1000)),
        (first, 1, Discount::none()),
        (ProductCode::new(99), 1, Discount::none()),
        (first, 999, Discount::none()),
    ];

    for (code, quantity, discount) in attempts {
        match ledger.record_sale(code, quantity, discount) {
            Ok(receipt) => println!("{}\n", receipt),
            Err(e) => println!("Sale not recorded: {}\n", e),
        }
    }

    if ledger.code_exists(first) {
        match ledger.restock(first, 20) {
            Ok(stock) => info!(code = %first, stock, "Restocked"),
            Err(e) => warn!(error = %e, "Restock failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_drafts_build_and_register() {
        let mut ledger = Ledger::new();
        for draft in generate_drafts(30) {
            ledger.add_product(draft.build().unwrap()).unwrap();
        }
        assert_eq!(ledger.product_count(), 30);
    }

    #[test]
    fn test_script_on_small_catalog() {
        let mut ledger = Ledger::new();
        for draft in generate_drafts(1) {
            ledger.add_product(draft.build().unwrap()).unwrap();
        }
        // product 1 starts with 3 units
        run_script(&mut ledger);

        assert_eq!(ledger.sales().len(), 1);
        assert_eq!(ledger.find_by_code(ProductCode::new(1)).unwrap().stock(), 20);
        assert_eq!(ledger.movements().len(), 2);
    }

    #[test]
    fn test_empty_catalog_script_records_nothing() {
        let mut ledger = Ledger::new();
        run_script(&mut ledger);
        assert!(ledger.sales().is_empty());
        assert!(ledger.movements().is_empty());
    }
}
