//! Typed access to raw submission JSON.
//!
//! Field submissions arrive as deeply nested JSON objects. Every object,
//! top-level or nested, carries an opaque `__id` assigned by the collection
//! system. [`RawRecord`] borrows one such object and exposes typed getters
//! that distinguish "not answered" (`Ok(None)`) from "answered in the wrong
//! shape" (`Err(FieldError)`).
//!
//! # Value rules
//!
//! | Getter | Accepts | `None` when |
//! |--------|---------|-------------|
//! | `text` | string, number, boolean | missing, null, blank string |
//! | `integer` | integral number, integral numeric string | missing, null, blank string |
//! | `number` | number, numeric string | missing, null, blank string |
//! | `flag` | `yes`/`no`, `true`/`false` | missing, null, blank string |
//! | `object` | object | missing, null |
//! | `array` | array (missing/null gives an empty slice) | - |

use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::error::{FieldError, Result, SubmissionError};

/// Key of the collection-system identifier carried by every object.
pub const ID_KEY: &str = "__id";

static EMPTY_FIELDS: LazyLock<Map<String, Value>> = LazyLock::new(Map::new);

/// Borrowed view of one raw JSON object.
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> RawRecord<'a> {
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        Self { fields }
    }

    /// A record with no fields, standing in for an unanswered sub-form.
    pub fn empty<'b>() -> RawRecord<'b> {
        RawRecord {
            fields: &EMPTY_FIELDS,
        }
    }

    /// View `value` as a record; `key` names it in the error.
    pub fn from_value(value: &'a Value, key: &str) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(invalid_type(key, "object", other)),
        }
    }

    /// Raw value for `key`, treating JSON null as absent.
    pub fn value(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key).filter(|value| !value.is_null())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// The required `__id` of this object.
    pub fn id(&self) -> Result<&'a str> {
        match self.value(ID_KEY) {
            Some(Value::String(id)) if !id.trim().is_empty() => Ok(id.as_str()),
            Some(Value::String(_)) | None => Err(FieldError::Missing {
                key: ID_KEY.to_string(),
            }),
            Some(other) => Err(invalid_type(ID_KEY, "string", other)),
        }
    }

    pub fn text(&self, key: &str) -> Result<Option<String>> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::String(text)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(trimmed.to_string()))
                }
            }
            Some(Value::Number(number)) => Ok(Some(number.to_string())),
            Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
            Some(other) => Err(invalid_type(key, "text", other)),
        }
    }

    pub fn integer(&self, key: &str) -> Result<Option<i64>> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::Number(number)) => number
                .as_i64()
                .or_else(|| number.as_f64().and_then(integral))
                .map(Some)
                .ok_or_else(|| invalid_value(key, "integer", &number.to_string())),
            Some(Value::String(text)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed
                    .parse::<i64>()
                    .ok()
                    .or_else(|| trimmed.parse::<f64>().ok().and_then(integral))
                    .map(Some)
                    .ok_or_else(|| invalid_value(key, "integer", trimmed))
            }
            Some(other) => Err(invalid_type(key, "integer", other)),
        }
    }

    pub fn number(&self, key: &str) -> Result<Option<f64>> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::Number(number)) => number
                .as_f64()
                .map(Some)
                .ok_or_else(|| invalid_value(key, "number", &number.to_string())),
            Some(Value::String(text)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .map(Some)
                    .ok_or_else(|| invalid_value(key, "number", trimmed))
            }
            Some(other) => Err(invalid_type(key, "number", other)),
        }
    }

    pub fn flag(&self, key: &str) -> Result<Option<bool>> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::Bool(flag)) => Ok(Some(*flag)),
            Some(Value::String(text)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                match trimmed.to_ascii_lowercase().as_str() {
                    "yes" | "true" => Ok(Some(true)),
                    "no" | "false" => Ok(Some(false)),
                    _ => Err(invalid_value(key, "yes/no", trimmed)),
                }
            }
            Some(other) => Err(invalid_type(key, "yes/no", other)),
        }
    }

    /// True only when the flag is answered `yes`.
    pub fn is_yes(&self, key: &str) -> Result<bool> {
        Ok(self.flag(key)?.unwrap_or(false))
    }

    pub fn object(&self, key: &str) -> Result<Option<RawRecord<'a>>> {
        self.value(key)
            .map(|value| RawRecord::from_value(value, key))
            .transpose()
    }

    /// Nested sub-form, or an empty record when it is missing.
    pub fn section(&self, key: &str) -> Result<RawRecord<'a>> {
        Ok(self.object(key)?.unwrap_or_else(RawRecord::empty))
    }

    pub fn array(&self, key: &str) -> Result<&'a [Value]> {
        match self.value(key) {
            None => Ok(&[]),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(other) => Err(invalid_type(key, "array", other)),
        }
    }
}

fn integral(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

fn invalid_type(key: &str, expected: &'static str, found: &Value) -> FieldError {
    FieldError::InvalidType {
        key: key.to_string(),
        expected,
        found: json_type_name(found),
    }
}

fn invalid_value(key: &str, expected: &'static str, value: &str) -> FieldError {
    FieldError::InvalidValue {
        key: key.to_string(),
        expected,
        value: value.to_string(),
    }
}

/// Short JSON type name used in error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// One submission as received from the collection system.
///
/// The top-level value must be an object with a non-empty `__id`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSubmission {
    id: String,
    fields: Map<String, Value>,
}

impl RawSubmission {
    pub fn new(value: Value) -> std::result::Result<Self, SubmissionError> {
        let fields = match value {
            Value::Object(fields) => fields,
            other => return Err(invalid_type("submission", "object", &other).into()),
        };
        let id = RawRecord::new(&fields).id()?.to_string();
        Ok(Self { id, fields })
    }

    pub fn from_json_str(json: &str) -> std::result::Result<Self, SubmissionError> {
        let value: Value = serde_json::from_str(json)?;
        Self::new(value)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn record(&self) -> RawRecord<'_> {
        RawRecord::new(&self.fields)
    }
}
