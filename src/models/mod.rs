//! Data models for cells, metric tables, trades, and report documents.

mod cell;
mod metrics;
mod ordered;
mod report;
mod trade;

pub use cell::CellValue;
pub use metrics::{MetricField, MetricRecord, MetricValues};
pub use ordered::OrderedMap;
pub use report::{PropertyMap, ReportDocument};
pub use trade::{RowKind, Trade, TradeRow};
