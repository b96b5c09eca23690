//! Sheet table: a header row plus data rows of tagged cells.

use calamine::{Data, Range};

use super::normalize_label;
use crate::models::CellValue;

static EMPTY: CellValue = CellValue::Empty;

/// One data row of a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// 1-based row number in the source sheet
    pub number: usize,
    pub cells: Vec<CellValue>,
}

impl Row {
    /// Cell at a column index; out-of-range columns read as empty.
    pub fn cell(&self, column: usize) -> &CellValue {
        self.cells.get(column).unwrap_or(&EMPTY)
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(CellValue::is_empty)
    }
}

/// A named sheet read with its first row as the header.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    /// Raw header labels; `None` for empty header cells
    headers: Vec<Option<String>>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(name: impl Into<String>, headers: Vec<Option<String>>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    /// Build a table from a worksheet range. The first row of the used range
    /// is the header; fully blank data rows are skipped.
    pub fn from_range(name: &str, range: &Range<Data>) -> Self {
        let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
        let mut rows_iter = range.rows();

        let headers: Vec<Option<String>> = rows_iter
            .next()
            .map(|cells| {
                cells
                    .iter()
                    .map(|cell| {
                        CellValue::from_data(cell)
                            .as_text()
                            .filter(|label| !label.trim().is_empty())
                    })
                    .collect()
            })
            .unwrap_or_default();

        let rows: Vec<Row> = rows_iter
            .enumerate()
            .map(|(offset, cells)| Row {
                number: first_row + offset + 2,
                cells: cells.iter().map(CellValue::from_data).collect(),
            })
            .filter(|row| !row.is_blank())
            .collect();

        Self::new(name, headers, rows)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> &[Option<String>] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// (data rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.headers.len())
    }

    /// Index of the column whose raw header is exactly `header`.
    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.as_deref() == Some(header))
    }

    /// Headers passed through [`normalize_label`].
    pub fn normalized_headers(&self) -> Vec<String> {
        self.headers
            .iter()
            .map(|h| normalize_label(h.as_deref()))
            .collect()
    }
}

/// Build a table in memory. Empty header strings become unnamed columns.
#[cfg(test)]
pub fn table(name: &str, headers: &[&str], rows: Vec<Vec<CellValue>>) -> Table {
    let headers = headers
        .iter()
        .map(|h| (!h.is_empty()).then(|| h.to_string()))
        .collect();
    let rows = rows
        .into_iter()
        .enumerate()
        .map(|(i, cells)| Row { number: i + 2, cells })
        .collect();
    Table::new(name, headers, rows)
}
