//! Stock ledger domain module.
//!
//! An in-memory item → quantity ledger with low-stock reporting and a flat
//! JSON file format for persistence. [`SharedLedger`] wraps it for use from
//! several threads.

pub mod config;
pub mod item;
pub mod ledger;
pub mod report;
pub mod shared;
pub mod store;

pub use config::LedgerConfig;
pub use item::{ItemName, OperationLogEntry, Quantity};
pub use ledger::{AddOutcome, DEFAULT_LOW_STOCK_THRESHOLD, RemoveOutcome, StockLedger};
pub use report::{REPORT_HEADER, Report, render_report};
pub use shared::SharedLedger;
pub use store::{DEFAULT_INVENTORY_PATH, LoadOutcome, StoreError};
