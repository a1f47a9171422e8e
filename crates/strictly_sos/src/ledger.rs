//! Append-only record of placements.

use super::types::{Position, Seat, Symbol};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One accepted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct LedgerEntry {
    /// Seat that placed the tile.
    pub seat: Seat,
    /// Where it went.
    pub position: Position,
    /// What was placed.
    pub symbol: Symbol,
}

/// Every placement in order.
///
/// Its length is the authoritative count of filled cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnLedger {
    entries: Vec<LedgerEntry>,
}

impl TurnLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
    }

    /// Number of placements made.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true before the first placement.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&LedgerEntry> {
        self.entries.last()
    }
}
