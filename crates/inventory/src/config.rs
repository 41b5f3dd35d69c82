//! Ledger configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::item::Quantity;
use crate::ledger::DEFAULT_LOW_STOCK_THRESHOLD;
use crate::store::DEFAULT_INVENTORY_PATH;

/// Where the ledger is persisted and what counts as low stock.
///
/// Missing fields fall back to `inventory.json` and a threshold of 5.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    pub path: PathBuf,
    pub low_stock_threshold: Quantity,
}

impl LedgerConfig {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INVENTORY_PATH),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = LedgerConfig::default();
        assert_eq!(config.path, PathBuf::from("inventory.json"));
        assert_eq!(config.low_stock_threshold, 5);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: LedgerConfig = serde_json::from_str(r#"{"path": "/tmp/stock.json"}"#).unwrap();
        assert_eq!(config, LedgerConfig::with_path("/tmp/stock.json"));

        let config: LedgerConfig = serde_json::from_str(r#"{"low_stock_threshold": 2}"#).unwrap();
        assert_eq!(config.path, PathBuf::from("inventory.json"));
        assert_eq!(config.low_stock_threshold, 2);
    }
}
