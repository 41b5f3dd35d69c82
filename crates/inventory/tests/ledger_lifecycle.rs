//! End-to-end ledger lifecycle through the public API.

use stockledger_inventory::{
    LedgerConfig, LoadOutcome, RemoveOutcome, SharedLedger, StockLedger, render_report,
};

fn config_in(dir: &tempfile::TempDir) -> LedgerConfig {
    LedgerConfig::with_path(dir.path().join("inventory.json"))
}

#[test]
fn demo_flow_persists_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let mut ledger = StockLedger::new();
    let mut log = Vec::new();
    ledger.add("apple", 10, Some(&mut log)).unwrap();
    ledger.add("banana", 2, Some(&mut log)).unwrap();
    assert_eq!(ledger.remove("apple", 3), RemoveOutcome::Remaining(7));
    assert_eq!(ledger.remove("orange", 1), RemoveOutcome::NotFound);

    assert_eq!(ledger.get_quantity("apple"), 7);
    let low = ledger.low_stock_items(config.low_stock_threshold);
    assert_eq!(low.len(), 1);
    assert_eq!(low[0], "banana");
    assert_eq!(log.len(), 2);

    ledger.save(&config.path).unwrap();
    let before = ledger.clone();
    ledger.clear();
    assert_eq!(ledger.load(&config.path).unwrap(), LoadOutcome::Loaded { items: 2 });
    assert_eq!(ledger, before);

    assert_eq!(render_report(&ledger), "Items Report\napple -> 7\nbanana -> 2\n");
}

#[test]
fn load_without_file_keeps_prepopulated_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let mut ledger = StockLedger::new();
    ledger.add("apple", 7, None).unwrap();

    assert_eq!(ledger.load(&config.path).unwrap(), LoadOutcome::Missing);
    assert_eq!(ledger.get_quantity("apple"), 7);
}

#[test]
fn shared_ledger_survives_a_save_load_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let writer = SharedLedger::default();
    writer.add("bolt", 40, None).unwrap();
    writer.add("nut", 3, None).unwrap();
    writer.save(&config.path).unwrap();

    let reader = SharedLedger::default();
    reader.load(&config.path).unwrap();
    assert_eq!(reader.get_quantity("bolt"), 40);
    assert_eq!(reader.low_stock_items(5).len(), 1);
}
