use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

use stockledger_core::{DomainError, DomainResult};

use crate::item::{ItemName, OperationLogEntry, Quantity};
use crate::report::Report;

/// Threshold used by [`StockLedger::low_stock_items_default`].
pub const DEFAULT_LOW_STOCK_THRESHOLD: Quantity = 5;

/// Result of [`StockLedger::add`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Stock was updated; `quantity` is the new stored amount.
    Added { quantity: Quantity },
    /// Blank item name; nothing happened.
    Ignored,
}

/// Result of [`StockLedger::remove`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Stock decremented and still positive.
    Remaining(Quantity),
    /// Stock dropped to zero or below, so the item was dropped from the ledger.
    Cleared,
    /// The item was not in the ledger; nothing changed.
    NotFound,
}

/// In-memory item → quantity ledger.
///
/// Iteration follows insertion order: an item removed and added again moves
/// to the end. `remove` never leaves an item at zero or below. `add` accepts
/// any signed quantity and does not clean up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockLedger {
    quantities: HashMap<ItemName, Quantity>,
    order: Vec<ItemName>,
}

impl StockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.quantities.contains_key(item)
    }

    pub fn clear(&mut self) {
        self.quantities.clear();
        self.order.clear();
    }

    /// Add `qty` units of `item`, stamping any log entry with the current time.
    ///
    /// An empty `item` is ignored without touching the ledger or the log.
    pub fn add(
        &mut self,
        item: &str,
        qty: Quantity,
        log: Option<&mut Vec<OperationLogEntry>>,
    ) -> DomainResult<AddOutcome> {
        self.add_at(item, qty, Utc::now(), log)
    }

    /// Same as [`add`](Self::add) with an explicit log timestamp.
    pub fn add_at(
        &mut self,
        item: &str,
        qty: Quantity,
        occurred_at: DateTime<Utc>,
        log: Option<&mut Vec<OperationLogEntry>>,
    ) -> DomainResult<AddOutcome> {
        let Ok(name) = ItemName::parse(item) else {
            return Ok(AddOutcome::Ignored);
        };

        let current = self.quantities.get(item).copied().unwrap_or(0);
        let quantity = current.checked_add(qty).ok_or_else(|| {
            DomainError::invalid_argument(format!("adding {qty} to '{item}' overflows"))
        })?;

        self.upsert(name.clone(), quantity);
        tracing::debug!(item = %name, qty, quantity, "stock added");

        if let Some(log) = log {
            log.push(OperationLogEntry {
                occurred_at,
                item: name,
                quantity: qty,
            });
        }

        Ok(AddOutcome::Added { quantity })
    }

    /// Add from loosely typed input (e.g. a decoded request body).
    ///
    /// `item` must be a JSON string and `qty` an integer that fits in `i64`;
    /// anything else fails before the ledger is touched.
    pub fn add_value(
        &mut self,
        item: &JsonValue,
        qty: &JsonValue,
        log: Option<&mut Vec<OperationLogEntry>>,
    ) -> DomainResult<AddOutcome> {
        let JsonValue::String(item) = item else {
            return Err(DomainError::invalid_argument("item must be a string"));
        };
        let Some(qty) = qty.as_i64() else {
            return Err(DomainError::invalid_argument("quantity must be an integer"));
        };
        self.add(item, qty, log)
    }

    /// Subtract `qty` units of `item`, dropping the item once it reaches zero.
    pub fn remove(&mut self, item: &str, qty: Quantity) -> RemoveOutcome {
        let Some(current) = self.quantities.get_mut(item) else {
            tracing::warn!(item, "item not found in inventory");
            return RemoveOutcome::NotFound;
        };

        *current = current.saturating_sub(qty);
        let remaining = *current;

        if remaining <= 0 {
            self.quantities.remove(item);
            self.order.retain(|name| name.as_str() != item);
            tracing::debug!(item, qty, "stock cleared");
            RemoveOutcome::Cleared
        } else {
            tracing::debug!(item, qty, remaining, "stock removed");
            RemoveOutcome::Remaining(remaining)
        }
    }

    /// Stored quantity, or `None` when the item is unknown.
    pub fn quantity(&self, item: &str) -> Option<Quantity> {
        self.quantities.get(item).copied()
    }

    /// Stored quantity, or `0` (with a warning) when the item is unknown.
    ///
    /// Use [`quantity`](Self::quantity) to tell "unknown" apart from "zero".
    pub fn get_quantity(&self, item: &str) -> Quantity {
        self.quantity(item).unwrap_or_else(|| {
            tracing::warn!(item, "item not found");
            0
        })
    }

    /// Items whose quantity is strictly below `threshold`, in ledger order.
    pub fn low_stock_items(&self, threshold: Quantity) -> Vec<ItemName> {
        self.iter()
            .filter(|(_, qty)| *qty < threshold)
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn low_stock_items_default(&self) -> Vec<ItemName> {
        self.low_stock_items(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    /// Lazy view of `(item, quantity)` pairs for display.
    pub fn report(&self) -> Report<'_> {
        Report::new(self)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, Quantity)> + '_ {
        self.order.iter().map(|name| (name, self.quantities[name]))
    }

    /// Insert or overwrite, keeping the original position of existing items.
    pub(crate) fn upsert(&mut self, name: ItemName, quantity: Quantity) {
        if let Some(slot) = self.quantities.get_mut(&name) {
            *slot = quantity;
        } else {
            self.order.push(name.clone());
            self.quantities.insert(name, quantity);
        }
    }

    pub(crate) fn item_at(&self, index: usize) -> Option<(&ItemName, Quantity)> {
        let name = self.order.get(index)?;
        Some((name, self.quantities[name]))
    }
}

impl core::fmt::Display for StockLedger {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&crate::report::render_report(self))
    }
}
