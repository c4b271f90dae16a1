use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;

pub const MIN_DESCRIPTION_LENGTH: usize = 0;
pub const MAX_DESCRIPTION_LENGTH: usize = 100000;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 10000;

pub const MIN_LABEL_NAME_LENGTH: usize = 1;
pub const MAX_LABEL_NAME_LENGTH: usize = 1000;
pub const DEFAULT_MIN_LABEL_NAME_LENGTH: usize = 3;
pub const DEFAULT_MAX_LABEL_NAME_LENGTH: usize = 1000;

pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 500;
pub const DEFAULT_MAX_NAME_LENGTH: usize = 100;

pub const MIN_LABELS_PER_TASK: usize = 0;
pub const MAX_LABELS_PER_TASK: usize = 1000;
pub const DEFAULT_MAX_LABELS_PER_TASK: usize = 50;

/// Field limits used to build the per-entity validation rule sets.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length for task titles
    pub max_title_length: usize,
    /// Maximum length for task content
    pub max_description_length: usize,
    /// Minimum length for label names
    pub min_label_name_length: usize,
    /// Maximum length for label names
    pub max_label_name_length: usize,
    /// Maximum length for user first/last names and task status names
    pub max_name_length: usize,
    /// Maximum number of labels attached to one task
    pub max_labels_per_task: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            min_label_name_length: DEFAULT_MIN_LABEL_NAME_LENGTH,
            max_label_name_length: DEFAULT_MAX_LABEL_NAME_LENGTH,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_labels_per_task: DEFAULT_MAX_LABELS_PER_TASK,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_title_length < MIN_TITLE_LENGTH || self.max_title_length > MAX_TITLE_LENGTH {
            return Err(ConfigError::validation(format!(
                "validation.max_title_length must be {}-{}, got {}",
                MIN_TITLE_LENGTH, MAX_TITLE_LENGTH, self.max_title_length
            )));
        }

        if self.max_description_length < MIN_DESCRIPTION_LENGTH
            || self.max_description_length > MAX_DESCRIPTION_LENGTH
        {
            return Err(ConfigError::validation(format!(
                "validation.max_description_length must be {}-{}, got {}",
                MIN_DESCRIPTION_LENGTH, MAX_DESCRIPTION_LENGTH, self.max_description_length
            )));
        }

        for (name, value) in [
            ("min_label_name_length", self.min_label_name_length),
            ("max_label_name_length", self.max_label_name_length),
        ] {
            if !(MIN_LABEL_NAME_LENGTH..=MAX_LABEL_NAME_LENGTH).contains(&value) {
                return Err(ConfigError::validation(format!(
                    "validation.{} must be {}-{}, got {}",
                    name, MIN_LABEL_NAME_LENGTH, MAX_LABEL_NAME_LENGTH, value
                )));
            }
        }

        if self.min_label_name_length > self.max_label_name_length {
            return Err(ConfigError::validation(format!(
                "validation.min_label_name_length ({}) exceeds max_label_name_length ({})",
                self.min_label_name_length, self.max_label_name_length
            )));
        }

        if self.max_name_length < MIN_NAME_LENGTH || self.max_name_length > MAX_NAME_LENGTH {
            return Err(ConfigError::validation(format!(
                "validation.max_name_length must be {}-{}, got {}",
                MIN_NAME_LENGTH, MAX_NAME_LENGTH, self.max_name_length
            )));
        }

        if self.max_labels_per_task > MAX_LABELS_PER_TASK {
            return Err(ConfigError::validation(format!(
                "validation.max_labels_per_task must be {}-{}, got {}",
                MIN_LABELS_PER_TASK, MAX_LABELS_PER_TASK, self.max_labels_per_task
            )));
        }

        Ok(())
    }
}
