//! Raw item records from the Divine Pride catalog
//!
//! A record is the JSON object the catalog API returns for one item. Fields
//! are looked up by their catalog name; typed accessors treat a missing field
//! and an explicit `null` the same way (`Ok(None)`) and fail only when a
//! value is present but of the wrong kind.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ConvertError, Result};

/// One item as returned by the catalog
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: Map<String, Value>,
}

impl RawRecord {
    /// Parse a record from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Wrap a JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ConvertError::InvalidRecord(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Value of a field, `None` if missing or `null`
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    /// Catalog item id, if the record carries one
    pub fn id(&self) -> Option<i64> {
        self.get("id").and_then(Value::as_i64)
    }

    pub fn int(&self, field: &'static str) -> Result<Option<i64>> {
        self.get(field)
            .map(|v| v.as_i64().ok_or_else(|| invalid(field, "an integer")))
            .transpose()
    }

    /// Integer field that must be present
    pub fn require_int(&self, field: &'static str) -> Result<i64> {
        self.int(field)?.ok_or(ConvertError::MissingField(field))
    }

    pub fn number(&self, field: &'static str) -> Result<Option<f64>> {
        self.get(field)
            .map(|v| v.as_f64().ok_or_else(|| invalid(field, "a number")))
            .transpose()
    }

    pub fn str(&self, field: &'static str) -> Result<Option<&str>> {
        self.get(field)
            .map(|v| v.as_str().ok_or_else(|| invalid(field, "a string")))
            .transpose()
    }

    /// Boolean field; the catalog sometimes writes flags as `0`/`1`
    pub fn flag(&self, field: &'static str) -> Result<Option<bool>> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(Value::Number(n)) => Ok(n.as_f64().map(|f| f != 0.0)),
            Some(_) => Err(invalid(field, "a boolean")),
        }
    }

    /// Nested object (e.g. `itemMoveInfo`) as a record of its own
    pub fn sub_record(&self, field: &'static str) -> Result<Option<RawRecord>> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::Object(fields)) => Ok(Some(Self {
                fields: fields.clone(),
            })),
            Some(_) => Err(invalid(field, "an object")),
        }
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl TryFrom<Value> for RawRecord {
    type Error = ConvertError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

/// True for values the catalog uses to mean "not applicable"
///
/// `0`, `0.0` and `false` all qualify; a literal zero is never copied into
/// the output.
pub fn is_zero_sentinel(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Bool(b) => !b,
        _ => false,
    }
}

fn invalid(field: &'static str, expected: &'static str) -> ConvertError {
    ConvertError::InvalidField { field, expected }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
