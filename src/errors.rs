//! Errors raised while converting a single workbook.

use std::path::PathBuf;

/// Failure converting one workbook. Every variant is scoped to a single file;
/// the batch runner logs it and moves on to the next workbook.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    // ── Input ──
    #[error("Failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Sheet '{sheet}' has no '{column}' column")]
    MissingColumn { sheet: String, column: String },

    #[error("Invalid trade number at row {row}: {value}")]
    InvalidTradeNumber { row: usize, value: String },

    // ── Output ──
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConvertError {
    pub fn missing_column(sheet: &str, column: &str) -> Self {
        ConvertError::MissingColumn {
            sheet: sheet.to_string(),
            column: column.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_problem() {
        let err = ConvertError::missing_column("List of trades", "trade_#");
        assert_eq!(err.to_string(), "Sheet 'List of trades' has no 'trade_#' column");

        let err = ConvertError::InvalidTradeNumber {
            row: 4,
            value: "1.5".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid trade number at row 4: 1.5");
    }
}
