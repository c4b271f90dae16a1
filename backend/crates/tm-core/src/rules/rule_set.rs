use crate::{Entity, FieldRule, MergeError};

use std::collections::BTreeMap;

/// Field rules for one entity type. Built once, shared across merges.
#[derive(Debug, Clone, Default)]
pub struct ValidationRuleSet {
    rules: BTreeMap<String, FieldRule>,
}

impl ValidationRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, field: &str, rule: FieldRule) -> Self {
        self.rules.insert(field.to_string(), rule);
        self
    }

    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.rules.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every mutable field of `E` has a rule, and every rule names a mutable field.
    #[track_caller]
    pub fn check_covers<E: Entity>(&self) -> Result<(), MergeError> {
        for spec in E::schema().iter().filter(|spec| spec.mutable) {
            if !self.rules.contains_key(spec.name) {
                return Err(MergeError::missing_rule(E::KIND, spec.name));
            }
        }

        for field in self.rules.keys() {
            let known = E::field_spec(field).is_some_and(|spec| spec.mutable);
            if !known {
                return Err(MergeError::stray_rule(E::KIND, field));
            }
        }

        Ok(())
    }
}
