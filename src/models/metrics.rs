//! Metric tables: Performance, Trades analysis, Risk performance ratios.

use serde::{Deserialize, Serialize};

use super::{CellValue, OrderedMap};

/// Values of one metric row, split by side. Sub-fields whose cell was empty
/// are `None` and left out of the JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_value: Option<CellValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_percent: Option<CellValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_value: Option<CellValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_percent: Option<CellValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_value: Option<CellValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_percent: Option<CellValue>,
}

impl MetricValues {
    /// Number of sub-fields present.
    #[cfg(test)]
    pub fn field_count(&self) -> usize {
        [
            &self.all_value,
            &self.all_percent,
            &self.long_value,
            &self.long_percent,
            &self.short_value,
            &self.short_percent,
        ]
        .iter()
        .filter(|v| v.is_some())
        .count()
    }
}

/// One of the six value columns of a metric sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricField {
    AllValue,
    AllPercent,
    LongValue,
    LongPercent,
    ShortValue,
    ShortPercent,
}

impl MetricField {
    pub const ALL: [MetricField; 6] = [
        MetricField::AllValue,
        MetricField::AllPercent,
        MetricField::LongValue,
        MetricField::LongPercent,
        MetricField::ShortValue,
        MetricField::ShortPercent,
    ];

    /// Exact header text of the source column.
    pub fn header(&self) -> &'static str {
        match self {
            MetricField::AllValue => "All USDT",
            MetricField::AllPercent => "All %",
            MetricField::LongValue => "Long USDT",
            MetricField::LongPercent => "Long %",
            MetricField::ShortValue => "Short USDT",
            MetricField::ShortPercent => "Short %",
        }
    }
}

impl MetricValues {
    pub fn slot_mut(&mut self, field: MetricField) -> &mut Option<CellValue> {
        match field {
            MetricField::AllValue => &mut self.all_value,
            MetricField::AllPercent => &mut self.all_percent,
            MetricField::LongValue => &mut self.long_value,
            MetricField::LongPercent => &mut self.long_percent,
            MetricField::ShortValue => &mut self.short_value,
            MetricField::ShortPercent => &mut self.short_percent,
        }
    }
}

/// Metric key (normalized row label) to its values.
pub type MetricRecord = OrderedMap<MetricValues>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_omitted() {
        let values = MetricValues {
            all_value: Some(CellValue::Float(1250.5)),
            long_percent: Some(CellValue::Float(12.5)),
            ..Default::default()
        };
        assert_eq!(values.field_count(), 2);

        let json = serde_json::to_value(&values).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("all_value"));
        assert!(obj.contains_key("long_percent"));
        assert!(!obj.contains_key("short_value"));
    }
}
