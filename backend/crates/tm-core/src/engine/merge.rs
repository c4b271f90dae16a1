//! Partial-update merge engine.
//!
//! Applies an [`UpdateRequest`] to an entity snapshot in one pass:
//!
//! 1. Check the rule set covers the entity schema (contract)
//! 2. Per request key: reject unknown/read-only keys, then apply the
//!    Absent / Null / Present policy of the field's [`FieldRule`](crate::FieldRule)
//! 3. Flag required fields left null or empty
//! 4. Return the new snapshot only if no issue was recorded
//!
//! The input snapshot is never modified; work happens on a clone.

use crate::{
    Entity, FieldChange, FieldState, MergeError, UpdateRequest, ValidationIssue,
    ValidationRuleSet, diff,
};

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use log::{debug, error};
use uuid::Uuid;

/// Merged snapshot together with the fields it changed.
#[derive(Debug, Clone)]
pub struct MergeOutcome<E> {
    pub snapshot: E,
    pub changes: Vec<FieldChange>,
}

/// Apply `request` to `current` under `rules`.
///
/// Returns the merged snapshot, [`MergeError::Rejected`] with every issue
/// found, or a contract-violation variant when the caller passed an
/// inconsistent rule set or a deleted snapshot.
pub fn merge<E: Entity>(
    request: &UpdateRequest,
    current: &E,
    rules: &ValidationRuleSet,
) -> Result<E, MergeError> {
    let result = apply(request, current, rules);

    match &result {
        Ok(_) => debug!(
            "Merged {} field(s) into {} {}",
            request.len(),
            E::KIND,
            current.id()
        ),
        Err(MergeError::Rejected { issues, .. }) => debug!(
            "Rejected update of {} {}: {}",
            E::KIND,
            current.id(),
            issues
                .iter()
                .map(ValidationIssue::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        ),
        Err(e) => error!("{}", e),
    }

    result
}

/// [`merge`], plus the list of fields whose value changed.
pub fn merge_tracked<E: Entity>(
    request: &UpdateRequest,
    current: &E,
    rules: &ValidationRuleSet,
) -> Result<MergeOutcome<E>, MergeError> {
    let snapshot = merge(request, current, rules)?;
    let changes = diff(current, &snapshot);
    Ok(MergeOutcome { snapshot, changes })
}

/// Validate a creation request by merging it onto a blank snapshot.
///
/// Required fields the request leaves out come back as REQUIRED_MISSING.
pub fn build<E: Entity>(
    request: &UpdateRequest,
    id: Uuid,
    created_at: DateTime<Utc>,
    rules: &ValidationRuleSet,
) -> Result<E, MergeError> {
    merge(request, &E::blank(id, created_at), rules)
}

fn apply<E: Entity>(
    request: &UpdateRequest,
    current: &E,
    rules: &ValidationRuleSet,
) -> Result<E, MergeError> {
    rules.check_covers::<E>()?;

    if current.is_deleted() {
        return Err(MergeError::deleted_snapshot(E::KIND));
    }

    let mut working = current.clone();
    let mut issues = Vec::new();

    for (field, state) in request.iter() {
        let Some(spec) = E::field_spec(field) else {
            issues.push(ValidationIssue::unknown_field(field));
            continue;
        };

        if !spec.mutable {
            issues.push(ValidationIssue::read_only(field));
            continue;
        }

        let rule = rules
            .rule(field)
            .ok_or_else(|| MergeError::missing_rule(E::KIND, field))?;

        match state {
            FieldState::Absent => {}
            FieldState::Null => {
                if rule.nullable {
                    working
                        .set(field, None)
                        .map_err(|e| MergeError::schema_mismatch(E::KIND, e))?;
                } else {
                    issues.push(ValidationIssue::not_nullable(field));
                }
            }
            FieldState::Present(raw) => {
                // Invalid values are not written, so the required check
                // below sees the previous value.
                let value = match spec.kind.decode(raw) {
                    Ok(value) => value,
                    Err(message) => {
                        issues.push(ValidationIssue::invalid_value(field, message));
                        continue;
                    }
                };

                if let Err(message) = rule.validate(&value) {
                    issues.push(ValidationIssue::invalid_value(field, message));
                    continue;
                }

                working
                    .set(field, Some(value))
                    .map_err(|e| MergeError::schema_mismatch(E::KIND, e))?;
            }
        }
    }

    // At most one issue per field
    let flagged: BTreeSet<String> = issues.iter().map(|i| i.field_name.clone()).collect();

    for spec in E::schema().iter().filter(|spec| spec.mutable) {
        let required = rules.rule(spec.name).is_some_and(|rule| rule.required);
        if !required || flagged.contains(spec.name) {
            continue;
        }

        let missing = working
            .get(spec.name)
            .is_none_or(|value| value.is_empty());
        if missing {
            issues.push(ValidationIssue::required_missing(spec.name));
        }
    }

    if issues.is_empty() {
        Ok(working)
    } else {
        Err(MergeError::Rejected {
            entity: E::KIND,
            issues,
        })
    }
}
