//! Human-readable stock report.

use core::fmt::Write as _;

use crate::item::{ItemName, Quantity};
use crate::ledger::StockLedger;

pub const REPORT_HEADER: &str = "Items Report";

/// Lazy `(item, quantity)` view over a ledger, in ledger order.
///
/// Borrowing the ledger keeps it unchanged for the life of the iterator; call
/// [`StockLedger::report`] again to see later state.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    ledger: &'a StockLedger,
    next: usize,
}

impl<'a> Report<'a> {
    pub(crate) fn new(ledger: &'a StockLedger) -> Self {
        Self { ledger, next: 0 }
    }
}

impl<'a> Iterator for Report<'a> {
    type Item = (&'a ItemName, Quantity);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.ledger.item_at(self.next)?;
        self.next += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.ledger.len().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Report<'_> {}

/// Render the console report: a header line, then `<item> -> <quantity>` per item.
pub fn render_report(ledger: &StockLedger) -> String {
    let mut out = String::from(REPORT_HEADER);
    out.push('\n');
    for (item, qty) in ledger.report() {
        let _ = writeln!(out, "{item} -> {qty}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_items_in_ledger_order() {
        let mut ledger = StockLedger::new();
        ledger.add("apple", 7, None).unwrap();
        ledger.add("banana", 2, None).unwrap();

        let rows: Vec<(String, Quantity)> = ledger
            .report()
            .map(|(name, qty)| (name.to_string(), qty))
            .collect();
        assert_eq!(rows, vec![("apple".to_string(), 7), ("banana".to_string(), 2)]);
        assert_eq!(ledger.report().len(), 2);
    }

    #[test]
    fn report_is_restartable_and_sees_current_state() {
        let mut ledger = StockLedger::new();
        ledger.add("apple", 1, None).unwrap();
        assert_eq!(ledger.report().count(), 1);

        ledger.add("banana", 1, None).unwrap();
        assert_eq!(ledger.report().count(), 2);
    }

    #[test]
    fn render_report_matches_console_format() {
        let mut ledger = StockLedger::new();
        ledger.add("apple", 7, None).unwrap();
        ledger.add("banana", 2, None).unwrap();

        assert_eq!(render_report(&ledger), "Items Report\napple -> 7\nbanana -> 2\n");
        assert_eq!(ledger.to_string(), render_report(&ledger));
    }

    #[test]
    fn empty_ledger_renders_header_only() {
        assert_eq!(render_report(&StockLedger::new()), "Items Report\n");
    }
}
