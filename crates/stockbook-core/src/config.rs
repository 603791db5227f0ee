//! # Ledger Configuration
//!
//! Display settings a [`Ledger`](crate::Ledger) is built with.
//!
//! The core never reads the environment; a driver (the seed binary, a shell)
//! fills a `LedgerConfig` and hands it to [`Ledger::with_config`](crate::Ledger::with_config).
//!
//! ## Defaults
//! ```text
//! currency_symbol = "R$"
//! timezone        = local
//! ```

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{DEFAULT_CURRENCY_SYMBOL, TIMESTAMP_FORMAT};

// =============================================================================
// Timestamp Zone
// =============================================================================

/// Which clock timestamps are shown in. Storage is always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampZone {
    /// The operator's local time zone.
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
}

impl TimestampZone {
    /// Formats `at` as `DD/MM/YYYY HH:MM:SS` in this zone.
    pub fn format(&self, at: DateTime<Utc>) -> String {
        match self {
            TimestampZone::Local => at.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
            TimestampZone::Utc => at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

impl fmt::Display for TimestampZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampZone::Local => write!(f, "local"),
            TimestampZone::Utc => write!(f, "utc"),
        }
    }
}

impl FromStr for TimestampZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(TimestampZone::Local),
            "utc" | "z" => Ok(TimestampZone::Utc),
            other => Err(format!(
                "Unknown timezone: '{}'. Valid options: local, utc",
                other
            )),
        }
    }
}

// =============================================================================
// Ledger Config
// =============================================================================

/// Settings for one ledger instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Prefix for money in projections (`R$67.50`).
    pub currency_symbol: String,

    /// Zone used when formatting sale and movement timestamps.
    pub timezone: TimestampZone,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            timezone: TimestampZone::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_defaults() {
        let config = LedgerConfig::default();
        assert_eq!(config.currency_symbol, "R$");
        assert_eq!(config.timezone, TimestampZone::Local);
    }

    #[test]
    fn test_utc_format() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();
        assert_eq!(TimestampZone::Utc.format(at), "05/03/2024 14:07:09");
    }

    #[test]
    fn test_zone_from_str() {
        assert_eq!("UTC".parse::<TimestampZone>().unwrap(), TimestampZone::Utc);
        assert_eq!(" local ".parse::<TimestampZone>().unwrap(), TimestampZone::Local);
        assert!("mars".parse::<TimestampZone>().is_err());
        assert_eq!(TimestampZone::Utc.to_string(), "utc");
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: LedgerConfig = serde_json::from_str(r#"{"currency_symbol":"$"}"#).unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.timezone, TimestampZone::Local);
    }
}
