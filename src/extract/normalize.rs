//! Label normalization shared by headers, metric labels and property names.

/// Key used for a missing label.
pub const UNNAMED: &str = "unnamed";

/// Normalize a column header or row label into a JSON-friendly key.
///
/// Trims, lower-cases, turns spaces and `/` into `_` and `%` into `percent`.
/// A missing label becomes `"unnamed"`.
pub fn normalize_label(label: Option<&str>) -> String {
    let Some(raw) = label else {
        return UNNAMED.to_string();
    };

    raw.trim()
        .to_lowercase()
        .replace(' ', "_")
        .replace('/', "_")
        .replace('%', "percent")
}
