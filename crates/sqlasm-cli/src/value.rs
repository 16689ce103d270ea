//! Conversions between command-line text, bound values and JSON output.

use serde_json::{Number, Value};
use sqlasm_core::SqlValue;

/// Parses a command-line value.
///
/// JSON scalars keep their type (`21`, `2.5`, `true`, `null`, `"21"`);
/// anything else is bound as text.
pub fn parse_value(raw: &str) -> SqlValue {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Null) => SqlValue::Null,
        Ok(Value::Bool(b)) => SqlValue::Bool(b),
        Ok(Value::Number(n)) => n
            .as_i64()
            .map(SqlValue::Int)
            .or_else(|| n.as_f64().map(SqlValue::Float))
            .unwrap_or_else(|| SqlValue::Text(raw.to_string())),
        Ok(Value::String(s)) => SqlValue::Text(s),
        Ok(Value::Array(_) | Value::Object(_)) | Err(_) => SqlValue::Text(raw.to_string()),
    }
}

/// Splits `column=value` at the first `=`.
pub fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((column, value)) if !column.trim().is_empty() => {
            Ok((column.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected COLUMN=VALUE, got '{raw}'")),
    }
}

/// Renders a bound value as JSON for output.
pub fn to_json(value: &SqlValue) -> Value {
    match value {
        SqlValue::Null => Value::Null,
        SqlValue::Bool(b) => Value::Bool(*b),
        SqlValue::Int(n) => Value::Number((*n).into()),
        SqlValue::Float(x) => Number::from_f64(*x).map_or(Value::Null, Value::Number),
        SqlValue::Text(s) => Value::String(s.clone()),
        SqlValue::Blob(_) => Value::String(value.to_string()),
    }
}
