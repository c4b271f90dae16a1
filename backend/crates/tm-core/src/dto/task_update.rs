use crate::FieldState;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Typed partial update for a task.
///
/// Convert with [`UpdateRequest::from_dto`](crate::UpdateRequest::from_dto).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(default, skip_serializing_if = "FieldState::is_absent")]
    pub title: FieldState<String>,
    #[serde(default, skip_serializing_if = "FieldState::is_absent")]
    pub index: FieldState<i32>,
    #[serde(default, skip_serializing_if = "FieldState::is_absent")]
    pub content: FieldState<String>,
    /// Task status slug
    #[serde(default, skip_serializing_if = "FieldState::is_absent")]
    pub status: FieldState<String>,
    #[serde(default, skip_serializing_if = "FieldState::is_absent")]
    pub assignee_id: FieldState<Uuid>,
    #[serde(default, skip_serializing_if = "FieldState::is_absent")]
    pub label_ids: FieldState<BTreeSet<Uuid>>,
}
