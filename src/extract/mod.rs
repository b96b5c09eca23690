//! Sheet extraction: tables, label normalization, and per-sheet extractors.

mod metric_table;
mod normalize;
mod properties;
pub(crate) mod table;
mod trade_list;

pub use metric_table::extract_metric_table;
pub use normalize::normalize_label;
pub use properties::extract_properties;
pub use table::Table;
pub use trade_list::extract_trades;
