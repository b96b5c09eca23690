//! Extractor for the "List of trades" sheet.

use std::collections::HashMap;

use tracing::debug;

use super::Table;
use crate::errors::ConvertError;
use crate::models::{RowKind, Trade, TradeRow};

/// Normalized header of the trade number column.
pub const TRADE_NUMBER_COLUMN: &str = "trade_#";

/// Normalized header of the entry/exit type column.
pub const TYPE_COLUMN: &str = "type";

/// Group trade-list rows into trades.
///
/// Trades come out in the order their number is first seen. Each row keeps
/// its non-empty cells under normalized column names and lands in `entries`
/// or `exits` according to its `type` cell; rows of any other type are
/// dropped. A row whose trade number is not an integer fails the whole sheet.
pub fn extract_trades(table: &Table) -> Result<Vec<Trade>, ConvertError> {
    let headers = table.normalized_headers();
    let find = |column: &str| {
        headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| ConvertError::missing_column(table.name(), column))
    };
    let number_col = find(TRADE_NUMBER_COLUMN)?;
    let type_col = find(TYPE_COLUMN)?;

    let mut trades: Vec<Trade> = Vec::new();
    let mut slots: HashMap<i64, usize> = HashMap::new();
    let mut dropped = 0usize;

    for row in table.rows() {
        let number_cell = row.cell(number_col);
        let number = number_cell
            .as_integer()
            .ok_or_else(|| ConvertError::InvalidTradeNumber {
                row: row.number,
                value: number_cell.as_text().unwrap_or_else(|| "<empty>".to_string()),
            })?;

        let slot = *slots.entry(number).or_insert_with(|| {
            trades.push(Trade::new(number));
            trades.len() - 1
        });

        let Some(kind) = RowKind::classify(row.cell(type_col)) else {
            dropped += 1;
            continue;
        };

        let record: TradeRow = headers
            .iter()
            .zip(&row.cells)
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(header, cell)| (header.clone(), cell.clone()))
            .collect();

        trades[slot].push(kind, record);
    }

    if dropped > 0 {
        debug!(sheet = table.name(), dropped, "Rows without entry/exit type dropped");
    }

    Ok(trades)
}
