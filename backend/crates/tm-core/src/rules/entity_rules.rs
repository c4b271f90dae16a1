use crate::validators::{email, integer_range, max_items, non_blank, slug, text_length};
use crate::{FieldRule, ValidationRuleSet};

use tm_config::ValidationConfig;

pub fn task_rules(config: &ValidationConfig) -> ValidationRuleSet {
    ValidationRuleSet::new()
        .with_rule(
            "title",
            FieldRule::required()
                .with_validator(non_blank())
                .with_validator(text_length(1, config.max_title_length)),
        )
        .with_rule(
            "index",
            FieldRule::optional().with_validator(integer_range(0, i32::MAX.into())),
        )
        .with_rule(
            "content",
            FieldRule::optional().with_validator(text_length(0, config.max_description_length)),
        )
        .with_rule("status", FieldRule::required().with_validator(slug()))
        .with_rule("assignee_id", FieldRule::optional())
        .with_rule(
            "label_ids",
            FieldRule::optional().with_validator(max_items(config.max_labels_per_task)),
        )
}

pub fn task_status_rules(config: &ValidationConfig) -> ValidationRuleSet {
    ValidationRuleSet::new()
        .with_rule(
            "name",
            FieldRule::required()
                .with_validator(non_blank())
                .with_validator(text_length(1, config.max_name_length)),
        )
        .with_rule(
            "slug",
            FieldRule::required()
                .with_validator(slug())
                .with_validator(text_length(1, config.max_name_length)),
        )
}

pub fn label_rules(config: &ValidationConfig) -> ValidationRuleSet {
    ValidationRuleSet::new().with_rule(
        "name",
        FieldRule::required()
            .with_validator(non_blank())
            .with_validator(text_length(
                config.min_label_name_length,
                config.max_label_name_length,
            )),
    )
}

pub fn user_rules(config: &ValidationConfig) -> ValidationRuleSet {
    ValidationRuleSet::new()
        .with_rule("email", FieldRule::required().with_validator(email()))
        .with_rule(
            "first_name",
            FieldRule::optional().with_validator(text_length(0, config.max_name_length)),
        )
        .with_rule(
            "last_name",
            FieldRule::optional().with_validator(text_length(0, config.max_name_length)),
        )
}
