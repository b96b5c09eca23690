//! Test fixtures: report workbooks written with rust_xlsxwriter.

use std::path::Path;

use rust_xlsxwriter::Workbook;

/// A fixture cell.
#[derive(Debug, Clone, Copy)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

/// Write a workbook with the given sheets, one row of cells per inner vec.
pub fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<Cell>>)]) {
    let mut workbook = Workbook::new();

    for (name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name).unwrap();

        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                match cell {
                    Cell::Text(s) => {
                        sheet.write_string(r, c, *s).unwrap();
                    }
                    Cell::Number(n) => {
                        sheet.write_number(r, c, *n).unwrap();
                    }
                    Cell::Blank => {}
                }
            }
        }
    }

    workbook.save(path).unwrap();
}

fn metric_sheet<'a>(rows: &[(&'a str, f64)]) -> Vec<Vec<Cell<'a>>> {
    let mut out = vec![vec![
        Cell::Blank,
        Cell::Text("All USDT"),
        Cell::Text("All %"),
        Cell::Text("Long USDT"),
        Cell::Text("Long %"),
        Cell::Text("Short USDT"),
        Cell::Text("Short %"),
    ]];
    for (label, value) in rows {
        out.push(vec![
            Cell::Text(*label),
            Cell::Number(*value),
            Cell::Blank,
            Cell::Blank,
            Cell::Blank,
            Cell::Number(*value / 2.0),
            Cell::Blank,
        ]);
    }
    out
}

fn trade_sheet<'a>(trades: &[(f64, &'a str, f64)]) -> Vec<Vec<Cell<'a>>> {
    let mut out = vec![vec![
        Cell::Text("Trade #"),
        Cell::Text("Type"),
        Cell::Text("Signal"),
        Cell::Text("Date/Time"),
        Cell::Text("Price USDT"),
    ]];
    for (number, kind, price) in trades {
        out.push(vec![
            Cell::Number(*number),
            Cell::Text(*kind),
            Cell::Text("Long"),
            Cell::Text("2024-01-05 12:00"),
            Cell::Number(*price),
        ]);
    }
    out
}

/// A complete, well-formed strategy report workbook.
pub fn write_report_workbook(path: &Path) {
    write_workbook(
        path,
        &[
            ("Performance", metric_sheet(&[("Net profit", 1523.75), ("Gross profit", 2100.5)])),
            ("Trades analysis", metric_sheet(&[("Total trades", 2.0)])),
            ("Risk performance ratios", metric_sheet(&[("Sharpe ratio", 1.25)])),
            (
                "List of trades",
                trade_sheet(&[
                    (1.0, "Entry long", 42000.5),
                    (1.0, "Exit long", 43000.5),
                    (2.0, "Entry short", 43100.25),
                ]),
            ),
            (
                "Properties",
                vec![
                    vec![Cell::Text("name"), Cell::Text("value")],
                    vec![Cell::Text("Initial capital"), Cell::Number(10000.0)],
                    vec![Cell::Blank, Cell::Number(5.0)],
                ],
            ),
        ],
    );
}

/// A report workbook whose trade list has no `Trade #` column.
pub fn write_workbook_without_trade_numbers(path: &Path) {
    write_workbook(
        path,
        &[
            ("Performance", metric_sheet(&[("Net profit", 10.0)])),
            (
                "List of trades",
                vec![
                    vec![Cell::Text("Type"), Cell::Text("Price USDT")],
                    vec![Cell::Text("Entry long"), Cell::Number(100.0)],
                ],
            ),
        ],
    );
}
