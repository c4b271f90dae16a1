use crate::FieldValue;

use std::fmt;
use std::sync::Arc;

/// Value predicate; the error string becomes the issue message.
pub type Validator = Arc<dyn Fn(&FieldValue) -> Result<(), String> + Send + Sync>;

/// Merge policy for a single field.
#[derive(Clone)]
pub struct FieldRule {
    /// Must hold a non-empty value after the merge
    pub required: bool,
    /// Accepts an explicit null
    pub nullable: bool,
    validators: Vec<Validator>,
}

impl FieldRule {
    /// Not required, nullable, no validators.
    pub fn optional() -> Self {
        Self {
            required: false,
            nullable: true,
            validators: Vec::new(),
        }
    }

    /// Required and not nullable.
    pub fn required() -> Self {
        Self {
            required: true,
            nullable: false,
            validators: Vec::new(),
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn not_nullable(self) -> Self {
        self.nullable(false)
    }

    /// Validators run in insertion order; the first failure wins.
    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&FieldValue) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validators.push(Arc::new(validator));
        self
    }

    pub fn validate(&self, value: &FieldValue) -> Result<(), String> {
        self.validators.iter().try_for_each(|validator| validator(value))
    }
}

impl Default for FieldRule {
    fn default() -> Self {
        Self::optional()
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("required", &self.required)
            .field("nullable", &self.nullable)
            .field("validators", &self.validators.len())
            .finish()
    }
}
