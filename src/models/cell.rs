//! Cell model: one spreadsheet cell carried through as a tagged value.

use std::fmt;

use calamine::{Data, ExcelDateTime};
use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize, Serializer};

/// Text layout used for date/time cells in the JSON output.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Value of a single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawCell")]
pub enum CellValue {
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Convert a cell read by calamine.
    ///
    /// Empty strings, NaN and error cells (`#N/A`, `#DIV/0!`, ...) count as empty.
    /// Integral floats are reported as integers since xlsx stores every number
    /// as a double.
    pub fn from_data(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => CellValue::Empty,
            Data::Int(v) => CellValue::Int(*v),
            Data::Float(v) => Self::from_f64(*v),
            Data::String(s) if s.is_empty() => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => Self::from_excel_datetime(dt),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        }
    }

    /// Dates honour the workbook's 1900/1904 date system. Durations (`[h]:mm`
    /// formats) become `H:MM:SS` text.
    fn from_excel_datetime(dt: &ExcelDateTime) -> Self {
        let converted = if dt.is_duration() {
            dt.as_duration().map(|d| CellValue::Text(format_duration(d)))
        } else {
            dt.as_datetime().map(CellValue::DateTime)
        };
        converted.unwrap_or_else(|| Self::from_f64(dt.as_f64()))
    }

    fn from_f64(v: f64) -> Self {
        if v.is_nan() {
            CellValue::Empty
        } else {
            match integral(v) {
                Some(i) => CellValue::Int(i),
                None => CellValue::Float(v),
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Integer reading of the cell: integers, integral floats and numeric text.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Int(v) => Some(*v),
            CellValue::Float(v) => integral(*v),
            CellValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Cell content as text, `None` when empty.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::DateTime(ts) => write!(f, "{}", ts.format(DATETIME_FORMAT)),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            CellValue::Empty => serializer.serialize_unit(),
            CellValue::Int(v) => serializer.serialize_i64(*v),
            CellValue::Float(v) => serializer.serialize_f64(*v),
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::DateTime(ts) => serializer.collect_str(&ts.format(DATETIME_FORMAT)),
        }
    }
}

/// JSON shape of a cell. Dates come back as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCell {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Null(()),
}

impl From<RawCell> for CellValue {
    fn from(raw: RawCell) -> Self {
        match raw {
            RawCell::Bool(b) => CellValue::Bool(b),
            RawCell::Int(v) => CellValue::Int(v),
            RawCell::Float(v) => CellValue::Float(v),
            RawCell::Text(s) => CellValue::Text(s),
            RawCell::Null(()) => CellValue::Empty,
        }
    }
}

/// `v` as an `i64` when it is integral and within range.
fn integral(v: f64) -> Option<i64> {
    if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

/// Elapsed time as `H:MM:SS`; hours are not wrapped at 24.
fn format_duration(d: TimeDelta) -> String {
    let total = d.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let secs = total.unsigned_abs();
    format!("{}{}:{:02}:{:02}", sign, secs / 3600, secs / 60 % 60, secs % 60)
}
