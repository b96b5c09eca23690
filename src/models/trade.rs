//! Trade model: one round-trip trade from the "List of trades" sheet.

use serde::{Deserialize, Serialize};

use super::{CellValue, OrderedMap};

/// One raw trade-list row: normalized column name to cell value, empty cells
/// omitted.
pub type TradeRow = OrderedMap<CellValue>;

/// Which side of a trade a row describes, read from its `type` cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Entry,
    Exit,
}

impl RowKind {
    /// Classify a `type` cell ("Entry long", "Exit short", ...).
    /// Case-insensitive; "entry" is checked first. Anything else is `None`.
    pub fn classify(type_cell: &CellValue) -> Option<Self> {
        let text = type_cell.as_text()?.to_lowercase();
        if text.contains("entry") {
            Some(RowKind::Entry)
        } else if text.contains("exit") {
            Some(RowKind::Exit)
        } else {
            None
        }
    }
}

/// A grouped trade with its entry and exit rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Trade number from the `Trade #` column
    pub trade_number: i64,

    /// Entry rows in sheet order
    #[serde(default)]
    pub entries: Vec<TradeRow>,

    /// Exit rows in sheet order
    #[serde(default)]
    pub exits: Vec<TradeRow>,
}

impl Trade {
    pub fn new(trade_number: i64) -> Self {
        Self {
            trade_number,
            entries: Vec::new(),
            exits: Vec::new(),
        }
    }

    pub fn push(&mut self, kind: RowKind, row: TradeRow) {
        match kind {
            RowKind::Entry => self.entries.push(row),
            RowKind::Exit => self.exits.push(row),
        }
    }

    /// True while the trade has an entry but no exit yet.
    pub fn is_open(&self) -> bool {
        !self.entries.is_empty() && self.exits.is_empty()
    }
}
