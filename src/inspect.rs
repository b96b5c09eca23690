//! Read-only inspection of converted reports and source workbooks.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::extract::Table;
use crate::models::{MetricRecord, ReportDocument};
use crate::workbook::Workbook;

/// First file in `dir` (by name) accepted by `filter`.
pub fn first_file(dir: &Path, filter: impl Fn(&Path) -> bool) -> Result<Option<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to list {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && filter(p))
        .collect();
    files.sort();
    Ok(files.into_iter().next())
}

fn write_metric_sample<W: Write>(out: &mut W, title: &str, record: &MetricRecord) -> io::Result<()> {
    writeln!(out, "\n--- {} ({}) ---", title, record.len())?;
    for (key, values) in record.iter().take(3) {
        writeln!(out, "  {}: {}", key, serde_json::to_string(values).unwrap_or_default())?;
    }
    Ok(())
}

/// Print the top-level keys of a report and a sample from each section.
pub fn write_report_sample<W: Write>(out: &mut W, doc: &ReportDocument) -> io::Result<()> {
    writeln!(out, "{}", doc)?;

    writeln!(out, "Top-level keys:")?;
    if let Ok(serde_json::Value::Object(map)) = serde_json::to_value(doc) {
        for key in map.keys() {
            writeln!(out, "  - {}", key)?;
        }
    }

    write_metric_sample(out, "Performance", &doc.performance)?;
    write_metric_sample(out, "Trades analysis", &doc.trades_analysis)?;
    write_metric_sample(out, "Risk performance ratios", &doc.risk_performance_ratios)?;

    writeln!(out, "\n--- First trade ---")?;
    match doc.trades.first() {
        Some(trade) => writeln!(
            out,
            "  {}",
            serde_json::to_string(trade).unwrap_or_default()
        )?,
        None => writeln!(out, "  (no trades)")?,
    }

    writeln!(out, "\n--- Properties ({}) ---", doc.properties.len())?;
    for (key, value) in doc.properties.iter().take(5) {
        writeln!(out, "  {}: {}", key, value)?;
    }
    Ok(())
}

fn write_table_overview<W: Write>(out: &mut W, table: &Table, preview_rows: usize) -> io::Result<()> {
    let (rows, cols) = table.shape();
    writeln!(out, "\n--- Sheet: {} ---", table.name())?;
    writeln!(out, "Shape: {} rows x {} columns", rows, cols)?;

    let headers: Vec<&str> = table
        .headers()
        .iter()
        .map(|h| h.as_deref().unwrap_or("<unnamed>"))
        .collect();
    writeln!(out, "Columns: {:?}", headers)?;

    for row in table.rows().iter().take(preview_rows) {
        let cells: Vec<String> = row.cells.iter().map(|c| c.to_string()).collect();
        writeln!(out, "  {:>4} | {}", row.number, cells.join(" | "))?;
    }
    Ok(())
}

/// Print sheet names, shapes, headers and the first rows of each sheet.
pub fn write_workbook_overview<W: Write>(
    out: &mut W,
    workbook: &Workbook,
    preview_rows: usize,
) -> io::Result<()> {
    let names: Vec<&str> = workbook.sheets().iter().map(|s| s.name()).collect();
    writeln!(out, "Sheet names: {:?}", names)?;

    for table in workbook.sheets() {
        write_table_overview(out, table, preview_rows)?;
    }
    Ok(())
}
