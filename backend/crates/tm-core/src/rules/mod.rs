pub mod entity_rules;
pub mod field_rule;
pub mod rule_set;
pub mod validators;
