//! Candidate value model
//!
//! The JSON-like vocabulary an object editor edits. This is richer than
//! plain JSON in two places the editor needs:
//!
//! - `Date` carries a calendar timestamp, with `Date(None)` marking a
//!   value that failed to parse (an editor cell holding an unreadable
//!   date). Only parseable dates satisfy the `date` schema kind.
//! - `Function` is a named reference to a callback registered by the host
//!   application.
//!
//! Absence ("no value provided") is never a `Value` variant: it is
//! `Option::<&Value>::None` at every lookup site. `Null` is a present
//! value and does NOT satisfy typed kinds.

use chrono::{DateTime, NaiveDate, Utc};

/// A JSON-like value with editor extensions
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Explicit null; present, but satisfies only the `any` kind
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit floating point; NaN is a legal number
    Number(f64),
    /// UTF-8 string
    String(String),
    /// Calendar timestamp; `None` marks an unparseable date
    Date(Option<DateTime<Utc>>),
    /// Named reference to a host-registered callback
    Function(String),
    /// Sequence of values
    Array(Vec<Value>),
    /// Insertion-ordered field mapping
    Object(Vec<(String, Value)>),
}

impl Value {
    /// A valid date value
    pub fn date(timestamp: DateTime<Utc>) -> Self {
        Value::Date(Some(timestamp))
    }

    /// A date value that failed to parse
    pub fn invalid_date() -> Self {
        Value::Date(None)
    }

    /// Parse a date from text. Accepts RFC 3339 timestamps and plain
    /// `YYYY-MM-DD` dates (read as midnight UTC); anything else yields an
    /// invalid date value rather than an error, mirroring how an editor
    /// keeps unreadable input around instead of dropping it.
    pub fn parse_date(text: &str) -> Self {
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
            return Value::Date(Some(timestamp.with_timezone(&Utc)));
        }

        if let Ok(day) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            if let Some(midnight) = day.and_hms_opt(0, 0, 0) {
                return Value::Date(Some(midnight.and_utc()));
            }
        }

        Value::Date(None)
    }

    /// A function-reference value
    pub fn function(name: impl Into<String>) -> Self {
        Value::Function(name.into())
    }

    /// Look up a field by name. Returns `None` for missing fields and for
    /// every non-object value, which is exactly the "absent" treatment the
    /// matcher needs when descending into a shape.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(fields) => fields
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// Returns the runtime type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::Function(_) => "function",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

/// Conversion from plain JSON. Numbers become `f64` (integers included);
/// object fields follow the source map's iteration order. JSON has no
/// date or function values, so those variants never come out of this
/// conversion.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(flag) => Value::Bool(flag),
            serde_json::Value::Number(number) => {
                Value::Number(number.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::String(text) => Value::String(text),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(name, value)| (name, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::String(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::String(text)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Number(number)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Number(number as f64)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(timestamp: DateTime<Utc>) -> Self {
        Value::Date(Some(timestamp))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}
