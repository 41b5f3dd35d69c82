use anyhow::Context;

use stockledger_inventory::{LedgerConfig, LoadOutcome, StockLedger};

fn main() -> anyhow::Result<()> {
    stockledger_observability::init();

    // Single optional positional argument: the inventory file path.
    let config = match std::env::args_os().nth(1) {
        Some(path) => LedgerConfig::with_path(path),
        None => LedgerConfig::default(),
    };

    let mut ledger = StockLedger::new();
    let mut log = Vec::new();

    ledger.add("apple", 10, Some(&mut log))?;
    ledger.add("banana", 2, Some(&mut log))?;
    ledger.remove("apple", 3);
    ledger.remove("orange", 1);

    println!("Apple stock: {}", ledger.get_quantity("apple"));

    let low_items = ledger.low_stock_items(config.low_stock_threshold);
    let low: Vec<&str> = low_items.iter().map(|item| item.as_str()).collect();
    println!("Low items: {low:?}");

    ledger
        .save(&config.path)
        .with_context(|| format!("failed to save inventory to {}", config.path.display()))?;

    match ledger.load(&config.path)? {
        LoadOutcome::Loaded { items } => tracing::debug!(items, "reloaded inventory"),
        outcome => tracing::warn!(?outcome, "inventory was not reloaded"),
    }

    print!("{ledger}");

    for entry in &log {
        tracing::info!(%entry, "operation");
    }

    Ok(())
}
