use crate::FieldState;

use serde::{Deserialize, Serialize};

/// Typed partial update for a task status
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskStatusUpdate {
    #[serde(default, skip_serializing_if = "FieldState::is_absent")]
    pub name: FieldState<String>,
    #[serde(default, skip_serializing_if = "FieldState::is_absent")]
    pub slug: FieldState<String>,
}
