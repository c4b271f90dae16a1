use crate::engine::entity::{
    optional_i32, optional_reference, optional_text, reference_set, required_text, unknown_field,
};
use crate::{Entity, FieldKind, FieldSpec, FieldValue, Result as CoreResult};

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const TASK_SCHEMA: &[FieldSpec] = &[
    FieldSpec::read_only("id", FieldKind::Reference),
    FieldSpec::mutable("title", FieldKind::Text),
    FieldSpec::mutable("index", FieldKind::Integer),
    FieldSpec::mutable("content", FieldKind::Text),
    // Task status slug
    FieldSpec::mutable("status", FieldKind::Text),
    FieldSpec::mutable("assignee_id", FieldKind::Reference),
    FieldSpec::mutable("label_ids", FieldKind::References),
    FieldSpec::read_only("created_at", FieldKind::Text),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,

    // Core fields
    pub title: String,
    #[serde(default)]
    pub index: Option<i32>,
    #[serde(default)]
    pub content: Option<String>,

    // Workflow
    pub status: String,

    // Assignment
    #[serde(default)]
    pub assignee_id: Option<Uuid>,
    #[serde(default)]
    pub label_ids: BTreeSet<Uuid>,

    // Audit
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(title: String, status: String) -> Self {
        Self {
            title,
            status,
            ..Self::blank(Uuid::new_v4(), Utc::now())
        }
    }
}

impl Entity for Task {
    const KIND: &'static str = "task";

    fn schema() -> &'static [FieldSpec] {
        TASK_SCHEMA
    }

    fn blank(id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: String::new(),
            index: None,
            content: None,
            status: String::new(),
            assignee_id: None,
            label_ids: BTreeSet::new(),
            created_at,
            deleted_at: None,
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn get(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::Reference(self.id)),
            "title" => Some(FieldValue::Text(self.title.clone())),
            "index" => self.index.map(|n| FieldValue::Integer(n.into())),
            "content" => self.content.clone().map(FieldValue::Text),
            "status" => Some(FieldValue::Text(self.status.clone())),
            "assignee_id" => self.assignee_id.map(FieldValue::Reference),
            "label_ids" => Some(FieldValue::References(self.label_ids.clone())),
            "created_at" => Some(FieldValue::Text(self.created_at.to_rfc3339())),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Option<FieldValue>) -> CoreResult<()> {
        match field {
            "title" => self.title = required_text(Self::KIND, field, value)?,
            "index" => self.index = optional_i32(Self::KIND, field, value)?,
            "content" => self.content = optional_text(Self::KIND, field, value)?,
            "status" => self.status = required_text(Self::KIND, field, value)?,
            "assignee_id" => self.assignee_id = optional_reference(Self::KIND, field, value)?,
            "label_ids" => self.label_ids = reference_set(Self::KIND, field, value)?,
            _ => return Err(unknown_field(Self::KIND, field)),
        }
        Ok(())
    }

    fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
