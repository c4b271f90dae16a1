use crate::{Entity, FieldValue};

use serde::{Deserialize, Serialize};

/// Before/after rendering of one changed field, for activity logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field_name: String,
    /// None = the field was null
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

/// Collects field changes, skipping fields whose rendering did not change
#[derive(Debug, Default)]
pub struct FieldChangeBuilder {
    changes: Vec<FieldChange>,
}

impl FieldChangeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(
        &mut self,
        field_name: &str,
        old_value: Option<&FieldValue>,
        new_value: Option<&FieldValue>,
    ) {
        let old_str = old_value.map(FieldValue::to_string);
        let new_str = new_value.map(FieldValue::to_string);
        if old_str != new_str {
            self.changes.push(FieldChange {
                field_name: field_name.to_string(),
                old_value: old_str,
                new_value: new_str,
            });
        }
    }

    pub fn build(self) -> Vec<FieldChange> {
        self.changes
    }
}

/// Changed mutable fields between two snapshots, in schema order.
pub fn diff<E: Entity>(before: &E, after: &E) -> Vec<FieldChange> {
    let mut builder = FieldChangeBuilder::new();
    for spec in E::schema().iter().filter(|spec| spec.mutable) {
        builder.track(
            spec.name,
            before.get(spec.name).as_ref(),
            after.get(spec.name).as_ref(),
        );
    }
    builder.build()
}
