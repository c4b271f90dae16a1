use crate::engine::entity::{required_text, unknown_field};
use crate::{Entity, FieldKind, FieldSpec, FieldValue, Result as CoreResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const LABEL_SCHEMA: &[FieldSpec] = &[
    FieldSpec::read_only("id", FieldKind::Reference),
    FieldSpec::mutable("name", FieldKind::Text),
    FieldSpec::read_only("created_at", FieldKind::Text),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Label {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
        }
    }
}

impl Entity for Label {
    const KIND: &'static str = "label";

    fn schema() -> &'static [FieldSpec] {
        LABEL_SCHEMA
    }

    fn blank(id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: String::new(),
            created_at,
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn get(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::Reference(self.id)),
            "name" => Some(FieldValue::Text(self.name.clone())),
            "created_at" => Some(FieldValue::Text(self.created_at.to_rfc3339())),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Option<FieldValue>) -> CoreResult<()> {
        match field {
            "name" => self.name = required_text(Self::KIND, field, value)?,
            _ => return Err(unknown_field(Self::KIND, field)),
        }
        Ok(())
    }
}
