use crate::{CoreError, ValidationIssue};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure of a merge attempt.
///
/// `Rejected` is the user-facing channel: the request was decodable but
/// violates the rules, and every issue is listed. All other variants are
/// contract violations by the calling code and should be escalated, not
/// shown to end users.
#[derive(Error, Debug)]
pub enum MergeError {
    #[error("{entity} update rejected with {} issue(s)", .issues.len())]
    Rejected {
        entity: &'static str,
        issues: Vec<ValidationIssue>,
    },

    #[error("No validation rule for {entity}.{field} {location}")]
    MissingRule {
        entity: &'static str,
        field: String,
        location: ErrorLocation,
    },

    #[error("Validation rule for {entity}.{field} has no matching schema field {location}")]
    StrayRule {
        entity: &'static str,
        field: String,
        location: ErrorLocation,
    },

    #[error("Cannot merge into deleted {entity} {location}")]
    DeletedSnapshot {
        entity: &'static str,
        location: ErrorLocation,
    },

    #[error("Schema mismatch for {entity}: {source} {location}")]
    SchemaMismatch {
        entity: &'static str,
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl MergeError {
    #[track_caller]
    pub fn missing_rule(entity: &'static str, field: &str) -> Self {
        MergeError::MissingRule {
            entity,
            field: field.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn stray_rule(entity: &'static str, field: &str) -> Self {
        MergeError::StrayRule {
            entity,
            field: field.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn deleted_snapshot(entity: &'static str) -> Self {
        MergeError::DeletedSnapshot {
            entity,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn schema_mismatch(entity: &'static str, source: CoreError) -> Self {
        MergeError::SchemaMismatch {
            entity,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True for programming defects, false for user validation failures.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, MergeError::Rejected { .. })
    }

    /// The validation issues, if this is a user-facing rejection.
    pub fn issues(&self) -> Option<&[ValidationIssue]> {
        match self {
            MergeError::Rejected { issues, .. } => Some(issues),
            _ => None,
        }
    }

    pub fn into_issues(self) -> Option<Vec<ValidationIssue>> {
        match self {
            MergeError::Rejected { issues, .. } => Some(issues),
            _ => None,
        }
    }
}
