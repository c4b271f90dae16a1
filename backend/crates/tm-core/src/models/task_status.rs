use crate::engine::entity::{required_text, unknown_field};
use crate::{Entity, FieldKind, FieldSpec, FieldValue, Result as CoreResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const TASK_STATUS_SCHEMA: &[FieldSpec] = &[
    FieldSpec::read_only("id", FieldKind::Reference),
    FieldSpec::mutable("name", FieldKind::Text),
    FieldSpec::mutable("slug", FieldKind::Text),
    FieldSpec::read_only("created_at", FieldKind::Text),
];

/// Workflow column a task can sit in (e.g. "draft", "to_review").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatus {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl TaskStatus {
    pub fn new(name: String, slug: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            slug,
            created_at: Utc::now(),
        }
    }
}

impl Entity for TaskStatus {
    const KIND: &'static str = "task_status";

    fn schema() -> &'static [FieldSpec] {
        TASK_STATUS_SCHEMA
    }

    fn blank(id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: String::new(),
            slug: String::new(),
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
            "slug" => Some(FieldValue::Text(self.slug.clone())),
            "created_at" => Some(FieldValue::Text(self.created_at.to_rfc3339())),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Option<FieldValue>) -> CoreResult<()> {
        match field {
            "name" => self.name = required_text(Self::KIND, field, value)?,
            "slug" => self.slug = required_text(Self::KIND, field, value)?,
            _ => return Err(unknown_field(Self::KIND, field)),
        }
        Ok(())
    }
}
