use crate::FieldState;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelUpdate {
    #[serde(default, skip_serializing_if = "FieldState::is_absent")]
    pub name: FieldState<String>,
}
