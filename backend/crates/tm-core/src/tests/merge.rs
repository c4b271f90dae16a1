use crate::{
    FieldRule, FieldState, Label, LabelUpdate, MergeError, ReasonCode, Task, TaskStatus,
    TaskStatusUpdate, UpdateRequest, User, UserUpdate, ValidationRuleSet, build, diff,
    label_rules, merge, merge_tracked, task_status_rules, user_rules,
};

use super::{default_task_rules, sample_task};

use std::collections::BTreeSet;

use chrono::Utc;
use googletest::prelude::*;
use serde_json::json;
use tm_config::ValidationConfig;
use uuid::Uuid;

fn codes(err: MergeError) -> Vec<(String, ReasonCode)> {
    err.into_issues()
        .unwrap()
        .into_iter()
        .map(|issue| (issue.field_name, issue.reason_code))
        .collect()
}

// =========================================================================
// Absent / Null / Present
// =========================================================================

#[test]
fn given_empty_request_when_merge_then_snapshot_unchanged() {
    // Given
    let current = sample_task();

    // When
    let merged = merge(&UpdateRequest::new(), &current, &default_task_rules()).unwrap();

    // Then
    assert_eq!(merged, current);
}

#[test]
fn given_present_values_when_merge_then_fields_replaced() {
    // Given
    let current = sample_task();
    let assignee = Uuid::new_v4();
    let request = UpdateRequest::from_json(&format!(
        r#"{{"title": "Publish notes", "index": 3, "assignee_id": "{}"}}"#,
        assignee
    ))
    .unwrap();

    // When
    let merged = merge(&request, &current, &default_task_rules()).unwrap();

    // Then
    assert_that!(merged.title.as_str(), eq("Publish notes"));
    assert_that!(merged.index, eq(Some(3)));
    assert_eq!(merged.assignee_id, Some(assignee));
    assert_eq!(merged.status, current.status);
    assert_eq!(merged.id, current.id);
}

#[test]
fn given_null_on_nullable_field_when_merge_then_cleared() {
    // Given
    let mut current = sample_task();
    current.content = Some("draft".to_string());
    current.assignee_id = Some(Uuid::new_v4());
    let request = UpdateRequest::new().with_null("content").with_null("assignee_id");

    // When
    let merged = merge(&request, &current, &default_task_rules()).unwrap();

    // Then
    assert!(merged.content.is_none());
    assert!(merged.assignee_id.is_none());
}

#[test]
fn given_null_label_ids_when_merge_then_set_emptied() {
    // Given
    let mut current = sample_task();
    current.label_ids = BTreeSet::from([Uuid::new_v4(), Uuid::new_v4()]);

    // When
    let merged = merge(
        &UpdateRequest::new().with_null("label_ids"),
        &current,
        &default_task_rules(),
    )
    .unwrap();

    // Then
    assert!(merged.label_ids.is_empty());
}

#[test]
fn given_merge_when_rejected_then_input_snapshot_untouched() {
    // Given
    let current = sample_task();
    let before = current.clone();
    let request = UpdateRequest::from_json(r#"{"content": "new", "title": null}"#).unwrap();

    // When
    let result = merge(&request, &current, &default_task_rules());

    // Then
    assert_that!(result, err(anything()));
    assert_eq!(current, before);
}

// =========================================================================
// Rejections
// =========================================================================

#[test]
fn given_null_on_required_field_when_merge_then_not_nullable() {
    let request = UpdateRequest::new().with_null("title");
    let err = merge(&request, &sample_task(), &default_task_rules()).unwrap_err();
    assert_eq!(codes(err), vec![("title".to_string(), ReasonCode::NotNullable)]);
}

#[test]
fn given_multiple_violations_when_merge_then_all_reported_in_key_order() {
    // Given
    let request = UpdateRequest::from_json(
        r#"{"title": null, "status": "Not A Slug", "index": "first", "colour": "red"}"#,
    )
    .unwrap();

    // When
    let err = merge(&request, &sample_task(), &default_task_rules()).unwrap_err();

    // Then
    assert_eq!(
        codes(err),
        vec![
            ("colour".to_string(), ReasonCode::UnknownField),
            ("index".to_string(), ReasonCode::InvalidValue),
            ("status".to_string(), ReasonCode::InvalidValue),
            ("title".to_string(), ReasonCode::NotNullable),
        ]
    );
}

#[test]
fn given_read_only_field_when_merge_then_read_only_issue() {
    let request = UpdateRequest::new()
        .with_value("id", Uuid::new_v4())
        .unwrap();
    let err = merge(&request, &sample_task(), &default_task_rules()).unwrap_err();
    assert_eq!(codes(err), vec![("id".to_string(), ReasonCode::ReadOnlyField)]);
}

#[test]
fn given_blank_title_when_merge_then_single_invalid_value() {
    // Given
    let request = UpdateRequest::from_json(r#"{"title": "   "}"#).unwrap();

    // When
    let err = merge(&request, &sample_task(), &default_task_rules()).unwrap_err();

    // Then
    let issues = err.into_issues().unwrap();
    assert_that!(issues.len(), eq(1));
    assert_that!(issues[0].reason_code, eq(ReasonCode::InvalidValue));
    assert_that!(issues[0].message.as_str(), contains_substring("blank"));
}

#[test]
fn given_title_over_configured_limit_when_merge_then_invalid_value() {
    // Given
    let config = ValidationConfig {
        max_title_length: 5,
        ..ValidationConfig::default()
    };
    let rules = crate::task_rules(&config);
    let request = UpdateRequest::from_json(r#"{"title": "Too long"}"#).unwrap();

    // When
    let err = merge(&request, &sample_task(), &rules).unwrap_err();

    // Then
    assert_eq!(codes(err), vec![("title".to_string(), ReasonCode::InvalidValue)]);
}

#[test]
fn given_invalid_email_when_merge_user_then_invalid_value() {
    let current = User::new("jane@example.com".to_string());
    let request = UpdateRequest::from_json(r#"{"email": "not-an-email"}"#).unwrap();
    let rules = user_rules(&ValidationConfig::default());

    let err = merge(&request, &current, &rules).unwrap_err();

    assert_eq!(codes(err), vec![("email".to_string(), ReasonCode::InvalidValue)]);
}

#[test]
fn given_short_label_name_when_merge_then_invalid_value() {
    let current = Label::new("bug".to_string());
    let request = UpdateRequest::from_json(r#"{"name": "ab"}"#).unwrap();
    let rules = label_rules(&ValidationConfig::default());

    let err = merge(&request, &current, &rules).unwrap_err();

    assert_eq!(codes(err), vec![("name".to_string(), ReasonCode::InvalidValue)]);
}

// =========================================================================
// Contract violations
// =========================================================================

#[test]
fn given_deleted_snapshot_when_merge_then_contract_violation() {
    // Given
    let mut current = sample_task();
    current.deleted_at = Some(Utc::now());

    // When
    let err = merge(&UpdateRequest::new(), &current, &default_task_rules()).unwrap_err();

    // Then
    assert!(err.is_contract_violation());
    assert!(matches!(err, MergeError::DeletedSnapshot { .. }));
}

#[test]
fn given_rule_set_missing_field_when_merge_then_missing_rule_before_any_issue() {
    // Given
    let rules = ValidationRuleSet::new().with_rule("title", FieldRule::required());
    let request = UpdateRequest::new().with_null("title");

    // When
    let err = merge(&request, &sample_task(), &rules).unwrap_err();

    // Then
    assert!(matches!(err, MergeError::MissingRule { .. }));
    assert!(err.issues().is_none());
}

#[test]
fn given_required_nullable_text_when_null_then_required_missing() {
    // Given
    let rules = ValidationRuleSet::new().with_rule("name", FieldRule::required().nullable(true));
    let request = UpdateRequest::new().with_null("name");

    // When
    let err = merge(&request, &Label::new("bug".to_string()), &rules).unwrap_err();

    // Then
    assert!(!err.is_contract_violation());
    assert_eq!(codes(err), vec![("name".to_string(), ReasonCode::RequiredMissing)]);
}

#[test]
fn given_optional_rule_on_text_column_when_null_then_cleared() {
    // Given
    let rules = ValidationRuleSet::new().with_rule("name", FieldRule::optional());
    let request = UpdateRequest::new().with_null("name");

    // When
    let merged = merge(&request, &Label::new("bug".to_string()), &rules).unwrap();

    // Then
    assert_eq!(merged.name, "");
}

#[test]
fn given_index_beyond_32_bits_without_range_rule_when_merge_then_invalid_value() {
    // Given
    let rules = default_task_rules().with_rule("index", FieldRule::optional());
    let request = UpdateRequest::from_json(r#"{"index": 5000000000}"#).unwrap();

    // When
    let err = merge(&request, &sample_task(), &rules).unwrap_err();

    // Then
    assert!(!err.is_contract_violation());
    assert_eq!(codes(err), vec![("index".to_string(), ReasonCode::InvalidValue)]);
}

// =========================================================================
// Build and change tracking
// =========================================================================

#[test]
fn given_empty_create_request_when_build_then_required_fields_missing() {
    // When
    let err = build::<Task>(
        &UpdateRequest::new(),
        Uuid::new_v4(),
        Utc::now(),
        &default_task_rules(),
    )
    .unwrap_err();

    // Then
    assert_eq!(
        codes(err),
        vec![
            ("title".to_string(), ReasonCode::RequiredMissing),
            ("status".to_string(), ReasonCode::RequiredMissing),
        ]
    );
}

#[test]
fn given_complete_create_request_when_build_then_entity_created() {
    // Given
    let id = Uuid::new_v4();
    let request = UpdateRequest::from_json(r#"{"title": "New task", "status": "todo"}"#).unwrap();

    // When
    let task: Task = build(&request, id, Utc::now(), &default_task_rules()).unwrap();

    // Then
    assert_eq!(task.id, id);
    assert_that!(task.title.as_str(), eq("New task"));
    assert!(task.content.is_none());
    assert!(task.label_ids.is_empty());
}

#[test]
fn given_merge_tracked_when_fields_change_then_changes_listed_in_schema_order() {
    // Given
    let current = sample_task();
    let request = UpdateRequest::new()
        .with("status", FieldState::Present(json!("done")))
        .with("title", FieldState::Present(json!(current.title.clone())))
        .with("content", FieldState::Present(json!("Shipped")));

    // When
    let outcome = merge_tracked(&request, &current, &default_task_rules()).unwrap();

    // Then
    let fields: Vec<&str> = outcome
        .changes
        .iter()
        .map(|change| change.field_name.as_str())
        .collect();
    assert_eq!(fields, vec!["content", "status"]);
    assert_eq!(outcome.changes[0].old_value, None);
    assert_eq!(outcome.changes[0].new_value.as_deref(), Some("Shipped"));
    assert_eq!(outcome.changes[1].old_value.as_deref(), Some("todo"));
}

#[test]
fn given_identical_snapshots_when_diff_then_no_changes() {
    let task = sample_task();
    assert!(diff(&task, &task.clone()).is_empty());
}

// =========================================================================
// Typed updates
// =========================================================================

#[test]
fn given_user_update_dto_when_merged_then_names_applied() {
    // Given
    let mut current = User::new("jane@example.com".to_string());
    current.last_name = Some("Smith".to_string());
    let update = UserUpdate {
        first_name: FieldState::Present("Jane".to_string()),
        last_name: FieldState::Null,
        ..UserUpdate::default()
    };
    let request = UpdateRequest::from_dto(&update).unwrap();

    // When
    let merged = merge(&request, &current, &user_rules(&ValidationConfig::default())).unwrap();

    // Then
    assert_eq!(merged.first_name.as_deref(), Some("Jane"));
    assert!(merged.last_name.is_none());
    assert_that!(merged.email.as_str(), eq("jane@example.com"));
}

#[test]
fn given_task_status_update_with_bad_slug_when_merged_then_rejected() {
    // Given
    let current = TaskStatus::new("To Do".to_string(), "todo".to_string());
    let update = TaskStatusUpdate {
        name: FieldState::Present("Doing".to_string()),
        slug: FieldState::Present("Doing Now".to_string()),
    };
    let request = UpdateRequest::from_dto(&update).unwrap();

    // When
    let err = merge(
        &request,
        &current,
        &task_status_rules(&ValidationConfig::default()),
    )
    .unwrap_err();

    // Then
    assert_eq!(codes(err), vec![("slug".to_string(), ReasonCode::InvalidValue)]);
}

#[test]
fn given_label_update_with_null_name_when_merged_then_not_nullable() {
    let update = LabelUpdate {
        name: FieldState::Null,
    };
    let request = UpdateRequest::from_dto(&update).unwrap();

    let err = merge(
        &request,
        &Label::new("bug".to_string()),
        &label_rules(&ValidationConfig::default()),
    )
    .unwrap_err();

    assert_eq!(codes(err), vec![("name".to_string(), ReasonCode::NotNullable)]);
}
