//! Partial-update merge engine for task-manager entities.
//!
//! Requests arrive as sparse field maps where every key is either absent,
//! explicitly null, or carries a value ([`FieldState`]). [`merge`] applies
//! such a request to an entity snapshot under a [`ValidationRuleSet`] and
//! returns either the new snapshot or every [`ValidationIssue`] found.

pub mod dto;
pub mod engine;
pub mod error;
pub mod models;
pub mod patch;
pub mod query;
pub mod rules;

#[cfg(test)]
mod tests;

pub use dto::label_update::LabelUpdate;
pub use dto::task_status_update::TaskStatusUpdate;
pub use dto::task_update::TaskUpdate;
pub use dto::user_update::UserUpdate;
pub use engine::entity::Entity;
pub use engine::field_change::{FieldChange, FieldChangeBuilder, diff};
pub use engine::merge::{MergeOutcome, build, merge, merge_tracked};
pub use error::{CoreError, MergeError, Result};
pub use models::entity_kind::EntityKind;
pub use models::label::Label;
pub use models::task::Task;
pub use models::task_status::TaskStatus;
pub use models::user::User;
pub use patch::field_kind::FieldKind;
pub use patch::field_spec::FieldSpec;
pub use patch::field_state::FieldState;
pub use patch::field_value::FieldValue;
pub use patch::reason_code::ReasonCode;
pub use patch::update_request::UpdateRequest;
pub use patch::validation_issue::ValidationIssue;
pub use query::sort::{SortField, SortOrder};
pub use query::task_query::{DEFAULT_PAGE_END, TaskPage, TaskQuery};
pub use rules::entity_rules::{label_rules, task_rules, task_status_rules, user_rules};
pub use rules::field_rule::{FieldRule, Validator};
pub use rules::rule_set::ValidationRuleSet;
pub use rules::validators;
