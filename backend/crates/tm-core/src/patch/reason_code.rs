use serde::{Deserialize, Serialize};

/// Machine-readable cause of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    /// Key is not a field of the entity
    UnknownField,
    /// Key names an immutable field (id, created_at)
    ReadOnlyField,
    /// Explicit null on a non-nullable field
    NotNullable,
    /// Value has the wrong type or fails the field validator
    InvalidValue,
    /// Required field is null or empty after the merge
    RequiredMissing,
}

impl ReasonCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownField => "UNKNOWN_FIELD",
            Self::ReadOnlyField => "READ_ONLY_FIELD",
            Self::NotNullable => "NOT_NULLABLE",
            Self::InvalidValue => "INVALID_VALUE",
            Self::RequiredMissing => "REQUIRED_MISSING",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
