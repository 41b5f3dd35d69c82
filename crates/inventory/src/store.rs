//! JSON file persistence for [`StockLedger`].
//!
//! The file is a flat object `{ "<item>": <quantity>, ... }` with no envelope.
//! Read-path problems that leave the in-memory ledger usable (missing file,
//! malformed JSON) are reported as a [`LoadOutcome`]; anything that would hide
//! data loss or a wrong-shaped file is a [`StoreError`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::item::{ItemName, Quantity};
use crate::ledger::StockLedger;

/// Inventory file used when no path is configured.
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected inventory data in {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode inventory: {0}")]
    Encode(#[source] serde_json::Error),
}

/// What a load did to the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Ledger replaced with `items` entries from the file.
    Loaded { items: usize },
    /// No file at the path; ledger left as it was.
    Missing,
    /// File is not valid JSON; ledger left as it was.
    Malformed { reason: String },
}

impl StockLedger {
    /// Replace the ledger with the contents of the JSON file at `path`.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadOutcome, StoreError> {
        let path = path.as_ref();

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "inventory file not found, starting fresh");
                return Ok(LoadOutcome::Missing);
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        match serde_json::from_str::<StockLedger>(&raw) {
            Ok(loaded) => {
                *self = loaded;
                tracing::info!(path = %path.display(), items = self.len(), "inventory loaded");
                Ok(LoadOutcome::Loaded { items: self.len() })
            }
            Err(err) if err.is_syntax() || err.is_eof() => {
                tracing::error!(path = %path.display(), error = %err, "invalid JSON in inventory file");
                Ok(LoadOutcome::Malformed {
                    reason: err.to_string(),
                })
            }
            Err(source) => Err(StoreError::Decode {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Write the ledger as pretty-printed JSON, overwriting `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let mut body = serde_json::to_string_pretty(self).map_err(StoreError::Encode)?;
        body.push('\n');

        fs::write(path, body).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), items = self.len(), "inventory saved");
        Ok(())
    }
}

impl Serialize for StockLedger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (item, qty) in self.iter() {
            map.serialize_entry(item, &qty)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StockLedger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LedgerVisitor)
    }
}

/// Builds a ledger in file order. A repeated key keeps its first position and
/// its last value.
struct LedgerVisitor;

impl<'de> Visitor<'de> for LedgerVisitor {
    type Value = StockLedger;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("a JSON object mapping item names to integer quantities")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut ledger = StockLedger::new();
        while let Some((item, qty)) = access.next_entry::<ItemName, Quantity>()? {
            ledger.upsert(item, qty);
        }
        Ok(ledger)
    }
}
