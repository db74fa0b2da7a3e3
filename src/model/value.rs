//! Cell values and the type tags the sink understands

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Formula(String),
}

impl CellValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// The data type this value would naturally carry
    pub fn natural_type(&self) -> CellDataType {
        match self {
            CellValue::Null => CellDataType::Null,
            CellValue::Bool(_) => CellDataType::Bool,
            CellValue::Int(_) | CellValue::Float(_) => CellDataType::Numeric,
            CellValue::String(_) | CellValue::Date(_) | CellValue::DateTime(_) => {
                CellDataType::String
            }
            CellValue::Formula(_) => CellDataType::Formula,
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Null => write!(f, ""),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(x) => write!(f, "{}", x),
            CellValue::String(s) => write!(f, "{}", s),
            CellValue::Date(d) => write!(f, "{}", d),
            CellValue::DateTime(dt) => write!(f, "{}", dt),
            CellValue::Formula(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i as i64)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    CellValue::Int(i)
                } else if let Some(f) = n.as_f64() {
                    CellValue::Float(f)
                } else {
                    CellValue::String(n.to_string())
                }
            }
            Value::String(s) => {
                // Recognize ISO-style dates and datetimes
                if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                    return CellValue::Date(date);
                }
                if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
                    return CellValue::DateTime(dt);
                }
                if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
                    return CellValue::DateTime(dt);
                }
                CellValue::String(s.clone())
            }
            // Nested structures are flattened to their JSON text
            Value::Array(_) | Value::Object(_) => CellValue::String(value.to_string()),
        }
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        CellValue::from(&value)
    }
}

/// Data type tag understood by the sink
///
/// Mirrors the spreadsheet library's explicit cell types. The binder treats
/// the set opaquely; it only ever picks `String` on its own (the generic
/// default for headers and undeclared columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellDataType {
    String,
    Numeric,
    Bool,
    Formula,
    Null,
    Error,
}

impl Default for CellDataType {
    fn default() -> Self {
        CellDataType::String
    }
}

impl std::fmt::Display for CellDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellDataType::String => write!(f, "s"),
            CellDataType::Numeric => write!(f, "n"),
            CellDataType::Bool => write!(f, "b"),
            CellDataType::Formula => write!(f, "f"),
            CellDataType::Null => write!(f, "null"),
            CellDataType::Error => write!(f, "e"),
        }
    }
}

/// Declared type for a column
///
/// A column with no declaration at all (`None` at the `ColumnMap` level)
/// defaults to a tagged `String` write. `Untyped` is distinct from unset: it
/// forces a plain write with no type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeHint {
    /// Write the value without any type tag
    Untyped,
    /// Write the value tagged with the given data type
    Typed(CellDataType),
}
