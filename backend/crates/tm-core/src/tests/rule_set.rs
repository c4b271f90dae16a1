use crate::{
    EntityKind, FieldRule, FieldValue, Label, MergeError, Task, TaskStatus, User,
    ValidationRuleSet, label_rules, task_status_rules, user_rules,
};

use super::default_task_rules;

use googletest::prelude::*;
use tm_config::ValidationConfig;

#[test]
fn given_builtin_rule_sets_when_checked_then_cover_their_entities() {
    let config = ValidationConfig::default();

    assert_that!(default_task_rules().check_covers::<Task>(), ok(anything()));
    assert_that!(task_status_rules(&config).check_covers::<TaskStatus>(), ok(anything()));
    assert_that!(label_rules(&config).check_covers::<Label>(), ok(anything()));
    assert_that!(user_rules(&config).check_covers::<User>(), ok(anything()));
}

#[test]
fn given_rules_missing_a_field_when_checked_then_missing_rule() {
    // Given
    let rules = ValidationRuleSet::new();

    // When
    let err = rules.check_covers::<Label>().unwrap_err();

    // Then
    assert!(matches!(err, MergeError::MissingRule { ref field, .. } if field == "name"));
    assert!(err.is_contract_violation());
}

#[test]
fn given_rule_for_read_only_field_when_checked_then_stray_rule() {
    // Given
    let rules = label_rules(&ValidationConfig::default()).with_rule("id", FieldRule::optional());

    // When
    let err = rules.check_covers::<Label>().unwrap_err();

    // Then
    assert!(matches!(err, MergeError::StrayRule { ref field, .. } if field == "id"));
}

#[test]
fn given_rule_for_unknown_field_when_checked_then_stray_rule() {
    let rules = label_rules(&ValidationConfig::default()).with_rule("colour", FieldRule::optional());
    let err = rules.check_covers::<Label>().unwrap_err();
    assert!(matches!(err, MergeError::StrayRule { .. }));
}

#[test]
fn given_entity_kind_when_rules_requested_then_cover_schema() {
    let config = ValidationConfig::default();
    for kind in EntityKind::ALL {
        let rules = kind.rules(&config);
        let mutable = kind.schema().iter().filter(|spec| spec.mutable).count();
        assert_that!(rules.len(), eq(mutable));
    }
}

#[test]
fn given_validators_when_rule_validates_then_first_failure_wins() {
    // Given
    let rule = FieldRule::required()
        .with_validator(|_: &FieldValue| Err("first".to_string()))
        .with_validator(|_: &FieldValue| Err("second".to_string()));

    // When
    let message = rule.validate(&FieldValue::Integer(1)).unwrap_err();

    // Then
    assert_that!(message.as_str(), eq("first"));
}

#[test]
fn given_rule_presets_then_flags_match() {
    let optional = FieldRule::optional();
    assert!(!optional.required && optional.nullable);

    let required = FieldRule::required();
    assert!(required.required && !required.nullable);

    assert!(!FieldRule::optional().not_nullable().nullable);
}

#[test]
fn given_rule_set_then_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ValidationRuleSet>();
}
