use crate::FieldValue;

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// Wire type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    /// 32-bit signed integer
    Integer,
    /// UUID string
    Reference,
    /// Array of UUID strings; duplicates collapse
    References,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Reference => "reference",
            Self::References => "references",
        }
    }

    /// Decode a non-null raw JSON value into a typed field value.
    ///
    /// The error string is user-facing; it ends up in an INVALID_VALUE issue.
    pub fn decode(&self, raw: &Value) -> Result<FieldValue, String> {
        match (self, raw) {
            (Self::Text, Value::String(s)) => Ok(FieldValue::Text(s.clone())),
            (Self::Integer, Value::Number(n)) => {
                let n = n
                    .as_i64()
                    .ok_or_else(|| format!("expected an integer, got {}", n))?;
                i32::try_from(n)
                    .map(|_| FieldValue::Integer(n))
                    .map_err(|_| {
                        format!(
                            "{} is out of range, expected {}..={}",
                            n,
                            i32::MIN,
                            i32::MAX
                        )
                    })
            }
            (Self::Reference, Value::String(s)) => parse_uuid(s).map(FieldValue::Reference),
            (Self::References, Value::Array(items)) => {
                let mut ids = BTreeSet::new();
                for item in items {
                    match item {
                        Value::String(s) => {
                            ids.insert(parse_uuid(s)?);
                        }
                        other => {
                            return Err(format!(
                                "expected an array of ids, found {}",
                                json_type_name(other)
                            ));
                        }
                    }
                }
                Ok(FieldValue::References(ids))
            }
            (kind, other) => Err(format!(
                "expected {}, got {}",
                kind.expected(),
                json_type_name(other)
            )),
        }
    }

    fn expected(&self) -> &'static str {
        match self {
            Self::Text => "a string",
            Self::Integer => "an integer",
            Self::Reference => "an id string",
            Self::References => "an array of ids",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn parse_uuid(s: &str) -> Result<Uuid, String> {
    Uuid::parse_str(s).map_err(|_| format!("'{}' is not a valid id", s))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
