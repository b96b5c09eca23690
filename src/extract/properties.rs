//! Extractor for the "Properties" sheet (strategy inputs and settings).

use super::{normalize_label, Table};
use crate::errors::ConvertError;
use crate::models::PropertyMap;

/// Exact header of the property name column.
pub const NAME_COLUMN: &str = "name";

/// Exact header of the property value column.
pub const VALUE_COLUMN: &str = "value";

/// Extract `name`/`value` rows into a property map.
///
/// Headers are matched exactly (case-sensitive), unlike the trade list.
/// Names are normalized, values are kept as-is. Rows with an empty name or
/// value are skipped; a repeated name overwrites the earlier value.
pub fn extract_properties(table: &Table) -> Result<PropertyMap, ConvertError> {
    let name_col = table
        .column(NAME_COLUMN)
        .ok_or_else(|| ConvertError::missing_column(table.name(), NAME_COLUMN))?;
    let value_col = table
        .column(VALUE_COLUMN)
        .ok_or_else(|| ConvertError::missing_column(table.name(), VALUE_COLUMN))?;

    let mut properties = PropertyMap::new();
    for row in table.rows() {
        let (name, value) = (row.cell(name_col), row.cell(value_col));
        if name.is_empty() || value.is_empty() {
            continue;
        }
        properties.insert(normalize_label(name.as_text().as_deref()), value.clone());
    }

    Ok(properties)
}
