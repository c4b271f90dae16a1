use crate::FieldState;

use serde::{Deserialize, Serialize};

/// Typed partial update for a user profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "FieldState::is_absent")]
    pub email: FieldState<String>,
    #[serde(default, skip_serializing_if = "FieldState::is_absent")]
    pub first_name: FieldState<String>,
    #[serde(default, skip_serializing_if = "FieldState::is_absent")]
    pub last_name: FieldState<String>,
}
