use std::fmt;

use serde::{Deserialize, Serialize};

/// A single normalized cell value.
///
/// Cells are read as text and promoted to a number only when the whole
/// string is a plain decimal number. Anything else keeps its original text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Missing,
}

impl CellValue {
    /// Numeric view of the cell. Text and missing cells have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Integer(value) => Some(*value as f64),
            CellValue::Float(value) => Some(*value),
            CellValue::Text(_) | CellValue::Missing => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Integer(_) | CellValue::Float(_))
    }

    /// Serialized (raw grid) form of the cell.
    ///
    /// Floats always carry a decimal point so that re-normalizing the output
    /// yields a `Float` again rather than an `Integer`.
    pub fn to_raw(&self) -> Option<String> {
        match self {
            CellValue::Missing => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(value) => write!(f, "{value}"),
            CellValue::Float(value) => {
                let text = value.to_string();
                if value.is_finite() && !text.contains('.') {
                    write!(f, "{text}.0")
                } else {
                    f.write_str(&text)
                }
            }
            CellValue::Text(value) => f.write_str(value),
            CellValue::Missing => Ok(()),
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}
