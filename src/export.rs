//! JSON output for report documents.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::errors::ConvertError;
use crate::models::ReportDocument;

/// Output path for a workbook: same directory and stem, `.json` extension.
pub fn output_path(source: &Path) -> PathBuf {
    source.with_extension("json")
}

/// Write a report as two-space indented UTF-8 JSON, replacing any existing
/// file. The document is serialized in full before the file is touched.
pub fn write_report_json(doc: &ReportDocument, path: &Path) -> Result<(), ConvertError> {
    let json = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, json).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a report JSON written by [`write_report_json`].
pub fn read_report_json(path: &Path) -> Result<ReportDocument> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid report JSON in {}", path.display()))
}
