//! Converter configuration.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the input directory.
pub const DATA_DIR_ENV: &str = "TVREPORT_DATA_DIR";

/// Where to look for report workbooks and which files count as one.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Conventional input directory, relative to the working directory
    pub data_dir: PathBuf,

    /// Used when `data_dir` does not exist (running from a subdirectory)
    pub fallback_data_dir: PathBuf,

    /// Spreadsheet file extension, matched case-insensitively
    pub extension: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            fallback_data_dir: PathBuf::from("..").join("data"),
            extension: "xlsx".to_string(),
        }
    }
}

impl ConverterConfig {
    /// Resolve the input directory against the working directory.
    pub fn resolve_data_dir(&self, explicit: Option<&Path>) -> PathBuf {
        self.resolve_from(Path::new(""), explicit)
    }

    /// Resolve the input directory against `base`. An explicit directory wins;
    /// otherwise `data_dir` if it exists, else `fallback_data_dir`.
    pub fn resolve_from(&self, base: &Path, explicit: Option<&Path>) -> PathBuf {
        if let Some(dir) = explicit {
            return dir.to_path_buf();
        }

        let primary = base.join(&self.data_dir);
        if primary.exists() {
            primary
        } else {
            base.join(&self.fallback_data_dir)
        }
    }

    /// True for files carrying the spreadsheet extension. Office lock files
    /// (`~$name.xlsx`) are excluded.
    pub fn is_spreadsheet(&self, path: &Path) -> bool {
        let has_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(&self.extension))
            .unwrap_or(false);
        let is_lock_file = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with("~$"))
            .unwrap_or(false);

        has_extension && !is_lock_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_existing_data_dir() {
        let root = tempfile::tempdir().unwrap();
        let config = ConverterConfig::default();

        std::fs::create_dir(root.path().join("data")).unwrap();
        assert_eq!(config.resolve_from(root.path(), None), root.path().join("data"));
    }

    #[test]
    fn test_resolve_falls_back_to_parent() {
        let root = tempfile::tempdir().unwrap();
        let src = root.path().join("src");
        std::fs::create_dir(&src).unwrap();

        let config = ConverterConfig::default();
        assert_eq!(config.resolve_from(&src, None), src.join("..").join("data"));
    }

    #[test]
    fn test_explicit_dir_wins() {
        let config = ConverterConfig::default();
        let explicit = Path::new("/tmp/reports");
        assert_eq!(config.resolve_from(Path::new(""), Some(explicit)), explicit);
    }

    #[test]
    fn test_is_spreadsheet() {
        let config = ConverterConfig::default();
        assert!(config.is_spreadsheet(Path::new("data/BTCUSDT.xlsx")));
        assert!(config.is_spreadsheet(Path::new("data/BTCUSDT.XLSX")));
        assert!(!config.is_spreadsheet(Path::new("data/BTCUSDT.json")));
        assert!(!config.is_spreadsheet(Path::new("data/xlsx")));
        assert!(!config.is_spreadsheet(Path::new("data/~$BTCUSDT.xlsx")));
    }
}
