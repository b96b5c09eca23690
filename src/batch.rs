//! Batch conversion of every report workbook in a directory.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::config::ConverterConfig;
use crate::errors::ConvertError;
use crate::export::{output_path, write_report_json};
use crate::workbook::read_report;

/// Convert one workbook and write its JSON next to it. Returns the output path.
pub fn convert_file(source: &Path) -> Result<PathBuf, ConvertError> {
    info!(file = %source.display(), "Processing workbook");

    let doc = read_report(source)?;
    let target = output_path(source);
    write_report_json(&doc, &target)?;

    let (entries, exits) = doc.row_counts();
    info!(
        output = %target.display(),
        trades = doc.trades.len(),
        entries = entries,
        exits = exits,
        properties = doc.properties.len(),
        "Saved report JSON"
    );
    Ok(target)
}

/// Spreadsheets directly inside `dir`, sorted by file name.
pub fn find_spreadsheets(dir: &Path, config: &ConverterConfig) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to list {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()));
    Ok(select_spreadsheets(entries, config))
}

/// Keep the spreadsheet files among directory entries. Entries that cannot
/// be read are skipped with a warning.
fn select_spreadsheets<I>(entries: I, config: &ConverterConfig) -> Vec<PathBuf>
where
    I: IntoIterator<Item = io::Result<PathBuf>>,
{
    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() && config.is_spreadsheet(&path) => files.push(path),
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Skipping unreadable directory entry"),
        }
    }
    files.sort();
    files
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Directory that was scanned
    pub input_dir: PathBuf,

    /// JSON files written
    pub converted: Vec<PathBuf>,

    /// Workbooks that produced no output, with the reason
    pub failures: Vec<(PathBuf, ConvertError)>,
}

impl BatchSummary {
    /// Number of spreadsheets found.
    pub fn found(&self) -> usize {
        self.converted.len() + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\n{:=^60}", " CONVERSION ")?;
        writeln!(f, "Input:      {}", self.input_dir.display())?;
        writeln!(f, "Found:      {}", self.found())?;
        writeln!(f, "Converted:  {}", self.converted.len())?;
        writeln!(f, "Failed:     {}", self.failures.len())?;
        for (path, err) in &self.failures {
            let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
            writeln!(f, "  {}: {}", name, err)?;
        }
        writeln!(f, "{:=^60}", "")?;
        Ok(())
    }
}

/// Convert every spreadsheet in `dir`.
///
/// Each file is converted on its own: a failure is logged and recorded in the
/// summary, and the run moves on. Finding no spreadsheets (or no directory)
/// is reported but is not an error.
pub fn convert_directory(dir: &Path, config: &ConverterConfig) -> Result<BatchSummary> {
    let mut summary = BatchSummary {
        input_dir: dir.to_path_buf(),
        ..Default::default()
    };

    if !dir.is_dir() {
        warn!(dir = %dir.display(), "Input directory does not exist");
        return Ok(summary);
    }

    let files = find_spreadsheets(dir, config)?;
    if files.is_empty() {
        warn!(dir = %dir.display(), "No spreadsheet files found");
        return Ok(summary);
    }

    info!(count = files.len(), dir = %dir.display(), "Found spreadsheet files to process");

    for file in files {
        match convert_file(&file) {
            Ok(output) => summary.converted.push(output),
            Err(e) => {
                error!(file = %file.display(), error = %e, "Failed to convert workbook");
                summary.failures.push((file, e));
            }
        }
    }

    info!(
        converted = summary.converted.len(),
        failed = summary.failures.len(),
        "Processing complete"
    );
    Ok(summary)
}
