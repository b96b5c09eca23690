//! Workbook reading and assembly of the report document.

use std::path::Path;

use calamine::{open_workbook_auto, Reader};
use tracing::debug;

use crate::errors::ConvertError;
use crate::extract::{extract_metric_table, extract_properties, extract_trades, Table};
use crate::models::ReportDocument;

/// The sheets of a report workbook this converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    Performance,
    TradesAnalysis,
    RiskPerformanceRatios,
    ListOfTrades,
    Properties,
}

impl SheetKind {
    /// Match a sheet name exactly (case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Performance" => Some(SheetKind::Performance),
            "Trades analysis" => Some(SheetKind::TradesAnalysis),
            "Risk performance ratios" => Some(SheetKind::RiskPerformanceRatios),
            "List of trades" => Some(SheetKind::ListOfTrades),
            "Properties" => Some(SheetKind::Properties),
            _ => None,
        }
    }
}

/// All sheets of a workbook, in workbook order.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: Vec<Table>,
}

impl Workbook {
    #[cfg(test)]
    pub fn new(sheets: Vec<Table>) -> Self {
        Self { sheets }
    }

    /// Read every sheet of a spreadsheet file.
    pub fn open(path: &Path) -> Result<Self, ConvertError> {
        let mut workbook = open_workbook_auto(path)?;
        let sheet_names = workbook.sheet_names().to_owned();

        let mut sheets = Vec::with_capacity(sheet_names.len());
        for name in sheet_names {
            let range = workbook.worksheet_range(&name)?;
            sheets.push(Table::from_range(&name, &range));
        }

        Ok(Self { sheets })
    }

    pub fn sheets(&self) -> &[Table] {
        &self.sheets
    }

    #[cfg(test)]
    pub fn sheet(&self, name: &str) -> Option<&Table> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    /// Build the report document. Unrecognized sheets are ignored and missing
    /// ones leave their field empty.
    pub fn to_document(&self, file_name: &str) -> Result<ReportDocument, ConvertError> {
        let mut doc = ReportDocument::new(file_name);

        for table in &self.sheets {
            let Some(kind) = SheetKind::from_name(table.name()) else {
                debug!(sheet = table.name(), "Ignoring unrecognized sheet");
                continue;
            };

            match kind {
                SheetKind::Performance => doc.performance = extract_metric_table(table),
                SheetKind::TradesAnalysis => doc.trades_analysis = extract_metric_table(table),
                SheetKind::RiskPerformanceRatios => {
                    doc.risk_performance_ratios = extract_metric_table(table)
                }
                SheetKind::ListOfTrades => doc.trades = extract_trades(table)?,
                SheetKind::Properties => doc.properties = extract_properties(table)?,
            }
        }

        Ok(doc)
    }
}

/// Read a workbook file and build its report document.
pub fn read_report(path: &Path) -> Result<ReportDocument, ConvertError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Workbook::open(path)?.to_document(&file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::table::table;
    use crate::fixtures::{self, Cell};
    use crate::models::CellValue;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_sheet_names_match_exactly() {
        assert_eq!(SheetKind::from_name("Performance"), Some(SheetKind::Performance));
        assert_eq!(SheetKind::from_name("List of trades"), Some(SheetKind::ListOfTrades));
        assert_eq!(SheetKind::from_name("performance"), None);
        assert_eq!(SheetKind::from_name("List of Trades"), None);
        assert_eq!(SheetKind::from_name("Summary"), None);
    }

    #[test]
    fn test_missing_sheets_leave_defaults() {
        let workbook = Workbook::new(vec![
            table(
                "Properties",
                &["name", "value"],
                vec![vec![text("Initial capital"), CellValue::Int(10000)]],
            ),
            table("Notes", &["anything"], vec![vec![text("ignored")]]),
        ]);

        let doc = workbook.to_document("report.xlsx").unwrap();
        assert_eq!(doc.file_name, "report.xlsx");
        assert!(doc.performance.is_empty());
        assert!(doc.trades_analysis.is_empty());
        assert!(doc.risk_performance_ratios.is_empty());
        assert!(doc.trades.is_empty());
        assert_eq!(doc.properties.len(), 1);
    }

    #[test]
    fn test_extraction_error_fails_document() {
        let workbook = Workbook::new(vec![table(
            "List of trades",
            &["Type", "Signal"],
            vec![vec![text("Entry long"), text("Long")]],
        )]);

        assert!(matches!(
            workbook.to_document("bad.xlsx"),
            Err(ConvertError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_read_report_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("BINANCE_BTCUSDT_2024.xlsx");
        fixtures::write_report_workbook(&path);

        let doc = read_report(&path).unwrap();
        assert_eq!(doc.file_name, "BINANCE_BTCUSDT_2024.xlsx");

        let net = doc.performance.get("net_profit").unwrap();
        assert_eq!(net.all_value, Some(CellValue::Float(1523.75)));
        assert_eq!(net.long_percent, None);
        assert!(doc.trades_analysis.contains_key("total_trades"));
        assert!(doc.risk_performance_ratios.contains_key("sharpe_ratio"));

        assert_eq!(doc.trades.len(), 2);
        assert_eq!(doc.trades[0].trade_number, 1);
        assert_eq!(doc.trades[0].entries.len(), 1);
        assert_eq!(doc.trades[0].exits.len(), 1);
        assert_eq!(doc.trades[1].trade_number, 2);
        assert_eq!(doc.trades[1].entries.len(), 1);
        assert!(doc.trades[1].exits.is_empty());

        let json = serde_json::to_value(&doc.properties).unwrap();
        assert_eq!(json, serde_json::json!({ "initial_capital": 10000 }));
    }

    #[test]
    fn test_open_reads_all_sheets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extra.xlsx");
        fixtures::write_workbook(
            &path,
            &[
                ("Summary", vec![vec![Cell::Text("a"), Cell::Text("b")]]),
                (
                    "Performance",
                    vec![
                        vec![Cell::Blank, Cell::Text("All USDT")],
                        vec![Cell::Text("Net profit"), Cell::Number(10.0)],
                    ],
                ),
            ],
        );

        let workbook = Workbook::open(&path).unwrap();
        let names: Vec<_> = workbook.sheets().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Summary", "Performance"]);
        assert_eq!(workbook.sheet("Performance").unwrap().shape(), (1, 2));
    }

    #[test]
    fn test_open_rejects_non_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"not a zip archive").unwrap();

        assert!(matches!(Workbook::open(&path), Err(ConvertError::Workbook(_))));
    }
}
