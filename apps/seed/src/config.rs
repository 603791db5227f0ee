//! Seed configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | variable | default |
//! |---|---|
//! | `STOCKBOOK_CURRENCY` | `R$` |
//! | `STOCKBOOK_TIMEZONE` | `local` |
//! | `STOCKBOOK_SEED_COUNT` | `5` |

use serde::{Deserialize, Serialize};
use std::env;

use stockbook_core::{LedgerConfig, TimestampZone};

/// Products generated when `STOCKBOOK_SEED_COUNT` is unset.
pub const DEFAULT_SEED_COUNT: usize = 5;

/// Seed binary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Settings handed to the ledger.
    pub ledger: LedgerConfig,

    /// Number of products to generate.
    pub seed_count: usize,
}

impl SeedConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, one call per variable.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = LedgerConfig::default();

        let currency_symbol = lookup("STOCKBOOK_CURRENCY").unwrap_or(defaults.currency_symbol);

        let timezone = match lookup("STOCKBOOK_TIMEZONE") {
            Some(raw) => raw
                .parse::<TimestampZone>()
                .map_err(|_| ConfigError::InvalidValue("STOCKBOOK_TIMEZONE".to_string()))?,
            None => defaults.timezone,
        };

        let seed_count = match lookup("STOCKBOOK_SEED_COUNT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STOCKBOOK_SEED_COUNT".to_string()))?,
            None => DEFAULT_SEED_COUNT,
        };

        Ok(SeedConfig {
            ledger: LedgerConfig {
                currency_symbol,
                timezone,
            },
            seed_count,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
