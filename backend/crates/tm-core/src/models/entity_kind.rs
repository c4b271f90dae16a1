use crate::{CoreError, Label, Result as CoreErrorResult, Task, TaskStatus, User};
use crate::{Entity, FieldSpec, ValidationRuleSet, rules::entity_rules};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tm_config::ValidationConfig;

/// Entity types the engine has a field table and rule set for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Task,
    TaskStatus,
    Label,
    User,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [Self::Task, Self::TaskStatus, Self::Label, Self::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task => Task::KIND,
            Self::TaskStatus => TaskStatus::KIND,
            Self::Label => Label::KIND,
            Self::User => User::KIND,
        }
    }

    pub fn schema(&self) -> &'static [FieldSpec] {
        match self {
            Self::Task => Task::schema(),
            Self::TaskStatus => TaskStatus::schema(),
            Self::Label => Label::schema(),
            Self::User => User::schema(),
        }
    }

    /// Default rule set for this entity, with limits from `config`
    pub fn rules(&self, config: &ValidationConfig) -> ValidationRuleSet {
        match self {
            Self::Task => entity_rules::task_rules(config),
            Self::TaskStatus => entity_rules::task_status_rules(config),
            Self::Label => entity_rules::label_rules(config),
            Self::User => entity_rules::user_rules(config),
        }
    }
}

impl FromStr for EntityKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "task" => Ok(Self::Task),
            "task_status" | "task-status" => Ok(Self::TaskStatus),
            "label" => Ok(Self::Label),
            "user" => Ok(Self::User),
            _ => Err(CoreError::InvalidEntityKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
