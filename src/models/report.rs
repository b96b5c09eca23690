//! Report document: the JSON written for one workbook.

use serde::{Deserialize, Serialize};

use super::{CellValue, MetricRecord, OrderedMap, Trade};

/// Strategy properties (normalized name to raw value).
pub type PropertyMap = OrderedMap<CellValue>;

/// Everything extracted from one report workbook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Source file base name, extension included
    pub file_name: String,

    #[serde(default)]
    pub performance: MetricRecord,

    #[serde(default)]
    pub trades_analysis: MetricRecord,

    #[serde(default)]
    pub risk_performance_ratios: MetricRecord,

    /// Trades in first-seen trade-number order
    #[serde(default)]
    pub trades: Vec<Trade>,

    #[serde(default)]
    pub properties: PropertyMap,
}

impl ReportDocument {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Default::default()
        }
    }

    /// Count of entry and exit rows across all trades.
    pub fn row_counts(&self) -> (usize, usize) {
        self.trades.iter().fold((0, 0), |(entries, exits), t| {
            (entries + t.entries.len(), exits + t.exits.len())
        })
    }
}

impl std::fmt::Display for ReportDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (entries, exits) = self.row_counts();
        let open = self.trades.iter().filter(|t| t.is_open()).count();

        writeln!(f, "\n{:=^60}", format!(" {} ", self.file_name))?;
        writeln!(f, "Performance metrics:      {}", self.performance.len())?;
        writeln!(f, "Trades analysis metrics:  {}", self.trades_analysis.len())?;
        writeln!(f, "Risk/performance ratios:  {}", self.risk_performance_ratios.len())?;
        writeln!(f, "Trades:                   {} ({} open)", self.trades.len(), open)?;
        writeln!(f, "Entry / exit rows:        {} / {}", entries, exits)?;
        writeln!(f, "Properties:               {}", self.properties.len())?;
        writeln!(f, "{:=^60}", "")?;
        Ok(())
    }
}
