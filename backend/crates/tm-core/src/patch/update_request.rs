use crate::{CoreError, FieldState, Result as CoreResult};

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Sparse field updates for one entity, keyed by field name.
///
/// Keys are kept exactly as sent; checking them against the entity schema is
/// the merge engine's job. A key that is not in the request reads as
/// [`FieldState::Absent`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateRequest {
    fields: BTreeMap<String, FieldState<Value>>,
}

impl UpdateRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one field's state. `Absent` removes the key.
    pub fn with(mut self, field: &str, state: FieldState<Value>) -> Self {
        match state {
            FieldState::Absent => {
                self.fields.remove(field);
            }
            state => {
                self.fields.insert(field.to_string(), state);
            }
        }
        self
    }

    /// Add a present value of any serializable type.
    pub fn with_value<T: Serialize>(self, field: &str, value: T) -> CoreResult<Self> {
        let value = serde_json::to_value(value)?;
        Ok(self.with(field, FieldState::from_json(value)))
    }

    /// Add an explicit null.
    pub fn with_null(self, field: &str) -> Self {
        self.with(field, FieldState::Null)
    }

    /// Decode a JSON object payload.
    pub fn from_json(payload: &str) -> CoreResult<Self> {
        let value: Value = serde_json::from_str(payload)?;
        Self::from_value(value)
    }

    /// Decode an already parsed JSON payload; anything but an object is rejected.
    #[track_caller]
    pub fn from_value(value: Value) -> CoreResult<Self> {
        match value {
            Value::Object(map) => Ok(Self::from_object(map)),
            other => Err(CoreError::decode(format!(
                "update payload must be a JSON object, got {}",
                match other {
                    Value::Array(_) => "an array",
                    Value::Null => "null",
                    _ => "a scalar",
                }
            ))),
        }
    }

    pub fn from_object(map: Map<String, Value>) -> Self {
        let fields = map
            .into_iter()
            .map(|(key, value)| (key, FieldState::from_json(value)))
            .collect();
        Self { fields }
    }

    /// Convert a typed update DTO whose fields are `FieldState<T>`.
    ///
    /// Absent fields must be skipped during serialization
    /// (`skip_serializing_if = "FieldState::is_absent"`), otherwise they would
    /// read back as explicit nulls.
    pub fn from_dto<T: Serialize>(dto: &T) -> CoreResult<Self> {
        Self::from_value(serde_json::to_value(dto)?)
    }

    pub fn state(&self, field: &str) -> FieldState<&Value> {
        self.fields
            .get(field)
            .map(FieldState::as_ref)
            .unwrap_or(FieldState::Absent)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldState<Value>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldState<Value> {
    /// JSON `null` is an explicit null; everything else is present.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => FieldState::Null,
            value => FieldState::Present(value),
        }
    }
}

impl<'de> Deserialize<'de> for UpdateRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_object(map))
    }
}

impl Serialize for UpdateRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.fields.serialize(serializer)
    }
}
