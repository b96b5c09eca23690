//! Extractor for the three metric sheets (Performance, Trades analysis,
//! Risk performance ratios). They share one layout: a label column followed
//! by All/Long/Short value and percent columns.

use tracing::debug;

use super::{normalize_label, Table};
use crate::models::{MetricField, MetricRecord, MetricValues};

/// Extract a metric sheet into a record keyed by normalized row label.
///
/// Rows without a label are skipped. A value column that is missing from the
/// sheet is simply never filled in. When two rows normalize to the same key
/// the later row replaces the earlier one.
pub fn extract_metric_table(table: &Table) -> MetricRecord {
    let columns: Vec<(usize, MetricField)> = MetricField::ALL
        .iter()
        .filter_map(|field| table.column(field.header()).map(|idx| (idx, *field)))
        .collect();

    let mut record = MetricRecord::new();

    for row in table.rows() {
        let Some(label) = row.cell(0).as_text() else {
            continue;
        };
        let key = normalize_label(Some(&label));

        let mut values = MetricValues::default();
        for &(idx, field) in &columns {
            let cell = row.cell(idx);
            if !cell.is_empty() {
                *values.slot_mut(field) = Some(cell.clone());
            }
        }

        if record.insert(key.clone(), values).is_some() {
            debug!(sheet = table.name(), metric = %key, row = row.number, "Duplicate metric replaced");
        }
    }

    record
}
