//! Thread-safe handle around a [`StockLedger`].

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockledger_core::DomainResult;

use crate::item::{ItemName, OperationLogEntry, Quantity};
use crate::ledger::{AddOutcome, RemoveOutcome, StockLedger};
use crate::store::{LoadOutcome, StoreError};

/// Cloneable, `Send + Sync` ledger handle. Clones share the same ledger.
///
/// Every operation takes the lock for its own duration only; a sequence of
/// calls is not atomic.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<RwLock<StockLedger>>,
}

impl SharedLedger {
    pub fn new(ledger: StockLedger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    // A panic while holding the lock cannot leave the ledger half-updated,
    // so poisoned guards are recovered.
    fn read(&self) -> RwLockReadGuard<'_, StockLedger> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StockLedger> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add(
        &self,
        item: &str,
        qty: Quantity,
        log: Option<&mut Vec<OperationLogEntry>>,
    ) -> DomainResult<AddOutcome> {
        self.write().add(item, qty, log)
    }

    pub fn remove(&self, item: &str, qty: Quantity) -> RemoveOutcome {
        self.write().remove(item, qty)
    }

    pub fn quantity(&self, item: &str) -> Option<Quantity> {
        self.read().quantity(item)
    }

    pub fn get_quantity(&self, item: &str) -> Quantity {
        self.read().get_quantity(item)
    }

    pub fn low_stock_items(&self, threshold: Quantity) -> Vec<ItemName> {
        self.read().low_stock_items(threshold)
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Result<LoadOutcome, StoreError> {
        self.write().load(path)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        self.read().save(path)
    }

    /// Point-in-time copy of the ledger.
    pub fn snapshot(&self) -> StockLedger {
        self.read().clone()
    }
}
