mod merge;
mod rule_set;
mod validators;

use crate::{Task, ValidationRuleSet, task_rules};

use tm_config::ValidationConfig;

pub(crate) fn sample_task() -> Task {
    Task::new("Write release notes".to_string(), "todo".to_string())
}

pub(crate) fn default_task_rules() -> ValidationRuleSet {
    task_rules(&ValidationConfig::default())
}
