use crate::ReasonCode;

use serde::{Deserialize, Serialize};

/// A single reason a field of an update request could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field_name: String,
    pub reason_code: ReasonCode,
    pub message: String,
}

impl ValidationIssue {
    pub fn new<S: Into<String>>(field_name: &str, reason_code: ReasonCode, message: S) -> Self {
        Self {
            field_name: field_name.to_string(),
            reason_code,
            message: message.into(),
        }
    }

    pub fn unknown_field(field_name: &str) -> Self {
        Self::new(
            field_name,
            ReasonCode::UnknownField,
            format!("{} is not a known field", field_name),
        )
    }

    pub fn read_only(field_name: &str) -> Self {
        Self::new(
            field_name,
            ReasonCode::ReadOnlyField,
            format!("{} cannot be changed", field_name),
        )
    }

    pub fn not_nullable(field_name: &str) -> Self {
        Self::new(
            field_name,
            ReasonCode::NotNullable,
            format!("{} cannot be null", field_name),
        )
    }

    pub fn invalid_value<S: Into<String>>(field_name: &str, message: S) -> Self {
        Self::new(field_name, ReasonCode::InvalidValue, message)
    }

    pub fn required_missing(field_name: &str) -> Self {
        Self::new(
            field_name,
            ReasonCode::RequiredMissing,
            format!("{} is required", field_name),
        )
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]: {}", self.field_name, self.reason_code, self.message)
    }
}
