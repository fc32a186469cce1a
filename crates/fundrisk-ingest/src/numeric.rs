//! Best-effort numeric coercion of text cells.
//!
//! Only plain decimal numbers are promoted: an optional sign, digits with an
//! optional fractional part, and an optional exponent. Thousands separators,
//! percent signs, currency symbols and special values (`nan`, `inf`) keep
//! the cell as text.

use std::sync::LazyLock;

use fundrisk_model::{CellValue, RawCell};
use regex::Regex;

static PLAIN_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$")
        .expect("Invalid plain number regex")
});

/// Check if a string is a plain decimal number (surrounding whitespace allowed).
pub fn is_plain_number(value: &str) -> bool {
    PLAIN_NUMBER_REGEX.is_match(value.trim())
}

/// Coerce one non-empty text cell.
///
/// A number with a fractional part or exponent becomes `Float`, otherwise
/// `Integer`; integers beyond `i64` fall back to `Float`. Anything that does
/// not parse, including non-finite results, keeps the original text.
pub fn coerce_text(value: &str) -> CellValue {
    let trimmed = value.trim();
    if !PLAIN_NUMBER_REGEX.is_match(trimmed) {
        return CellValue::Text(value.to_string());
    }
    let is_float = trimmed.contains(['.', 'e', 'E']);
    if !is_float {
        if let Ok(integer) = trimmed.parse::<i64>() {
            return CellValue::Integer(integer);
        }
    }
    match trimmed.parse::<f64>() {
        Ok(float) if float.is_finite() => CellValue::Float(float),
        _ => CellValue::Text(value.to_string()),
    }
}

/// Coerce a raw cell. Empty cells become `Missing`.
pub fn coerce_cell(cell: &RawCell) -> CellValue {
    match cell.as_deref() {
        None | Some("") => CellValue::Missing,
        Some(text) => coerce_text(text),
    }
}
