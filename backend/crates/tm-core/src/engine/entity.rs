use crate::{CoreError, FieldSpec, FieldValue, Result as CoreResult};

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A domain entity the merge engine can patch.
///
/// Implementations expose an explicit field table and per-field accessors;
/// there is no reflection. `set` receives values already decoded to the
/// field's [`FieldKind`](crate::FieldKind) and validated, so a type error
/// there means the schema and the accessor disagree.
pub trait Entity: Clone + Send + Sync {
    /// Entity name used in logs and errors
    const KIND: &'static str;

    fn schema() -> &'static [FieldSpec];

    /// A fresh snapshot with only identity fields set, used to validate creation requests.
    fn blank(id: Uuid, created_at: DateTime<Utc>) -> Self;

    fn id(&self) -> Uuid;

    /// Current value of a field; `None` for null or unknown fields.
    fn get(&self, field: &str) -> Option<FieldValue>;

    /// Overwrite a mutable field. `None` clears it.
    fn set(&mut self, field: &str, value: Option<FieldValue>) -> CoreResult<()>;

    fn is_deleted(&self) -> bool {
        false
    }

    fn field_spec(field: &str) -> Option<&'static FieldSpec> {
        Self::schema().iter().find(|spec| spec.name == field)
    }
}

// =============================================================================
// Accessor helpers for `Entity::set` implementations
// =============================================================================

/// Text column without a null state; null stores the empty string, which
/// the required check reports as missing.
#[track_caller]
pub fn required_text(
    entity: &'static str,
    field: &str,
    value: Option<FieldValue>,
) -> CoreResult<String> {
    match value {
        Some(FieldValue::Text(s)) => Ok(s),
        Some(other) => Err(mismatch(entity, field, "text", &other)),
        None => Ok(String::new()),
    }
}

#[track_caller]
pub fn optional_text(
    entity: &'static str,
    field: &str,
    value: Option<FieldValue>,
) -> CoreResult<Option<String>> {
    match value {
        Some(FieldValue::Text(s)) => Ok(Some(s)),
        Some(other) => Err(mismatch(entity, field, "text", &other)),
        None => Ok(None),
    }
}

#[track_caller]
pub fn optional_i32(
    entity: &'static str,
    field: &str,
    value: Option<FieldValue>,
) -> CoreResult<Option<i32>> {
    match value {
        Some(FieldValue::Integer(n)) => i32::try_from(n).map(Some).map_err(|_| {
            CoreError::field_write(entity, field, format!("{} does not fit in 32 bits", n))
        }),
        Some(other) => Err(mismatch(entity, field, "integer", &other)),
        None => Ok(None),
    }
}

#[track_caller]
pub fn optional_reference(
    entity: &'static str,
    field: &str,
    value: Option<FieldValue>,
) -> CoreResult<Option<Uuid>> {
    match value {
        Some(FieldValue::Reference(id)) => Ok(Some(id)),
        Some(other) => Err(mismatch(entity, field, "reference", &other)),
        None => Ok(None),
    }
}

/// Null clears the set.
#[track_caller]
pub fn reference_set(
    entity: &'static str,
    field: &str,
    value: Option<FieldValue>,
) -> CoreResult<BTreeSet<Uuid>> {
    match value {
        Some(FieldValue::References(ids)) => Ok(ids),
        Some(other) => Err(mismatch(entity, field, "references", &other)),
        None => Ok(BTreeSet::new()),
    }
}

#[track_caller]
pub fn unknown_field(entity: &'static str, field: &str) -> CoreError {
    CoreError::field_write(entity, field, "not a mutable field")
}

#[track_caller]
fn mismatch(entity: &'static str, field: &str, expected: &str, got: &FieldValue) -> CoreError {
    CoreError::field_write(
        entity,
        field,
        format!("expected {} value, got {:?}", expected, got),
    )
}
