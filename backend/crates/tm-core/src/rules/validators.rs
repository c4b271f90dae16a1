//! Reusable field validators.
//!
//! Each constructor returns a closure suitable for
//! [`FieldRule::with_validator`](crate::FieldRule::with_validator). Messages
//! name the constraint but not the field; the issue carries the field name.

use crate::FieldValue;

/// Text length in characters, inclusive bounds.
pub fn text_length(
    min: usize,
    max: usize,
) -> impl Fn(&FieldValue) -> Result<(), String> + Send + Sync + 'static {
    move |value| {
        let text = expect_text(value)?;
        let length = text.chars().count();

        if length < min {
            return Err(format!("must be at least {} characters", min));
        }

        if length > max {
            return Err(format!("must not exceed {} characters", max));
        }

        Ok(())
    }
}

/// Rejects empty and whitespace-only text.
pub fn non_blank() -> impl Fn(&FieldValue) -> Result<(), String> + Send + Sync + 'static {
    |value| {
        if expect_text(value)?.trim().is_empty() {
            return Err("must not be blank".to_string());
        }
        Ok(())
    }
}

/// `local@domain.tld` with no whitespace and a dotted domain.
pub fn email() -> impl Fn(&FieldValue) -> Result<(), String> + Send + Sync + 'static {
    |value| {
        let text = expect_text(value)?;
        let invalid = || Err(format!("'{}' is not a valid email address", text));

        if text.chars().any(char::is_whitespace) {
            return invalid();
        }

        let Some((local, domain)) = text.split_once('@') else {
            return invalid();
        };

        if local.is_empty() || domain.contains('@') {
            return invalid();
        }

        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
            return invalid();
        }

        Ok(())
    }
}

/// Lowercase ASCII letters, digits, `_` and `-`; must start with a letter.
pub fn slug() -> impl Fn(&FieldValue) -> Result<(), String> + Send + Sync + 'static {
    |value| {
        let text = expect_text(value)?;
        let mut chars = text.chars();

        let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_lowercase());
        let rest_valid = chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');

        if !starts_with_letter || !rest_valid {
            return Err(format!(
                "'{}' must be lowercase letters, digits, '_' or '-', starting with a letter",
                text
            ));
        }

        Ok(())
    }
}

/// Integer within inclusive bounds.
pub fn integer_range(
    min: i64,
    max: i64,
) -> impl Fn(&FieldValue) -> Result<(), String> + Send + Sync + 'static {
    move |value| {
        let n = value
            .as_integer()
            .ok_or_else(|| "must be an integer".to_string())?;

        if n < min || n > max {
            return Err(format!("must be between {} and {}, got {}", min, max, n));
        }

        Ok(())
    }
}

/// Reference set with at most `max` ids.
pub fn max_items(max: usize) -> impl Fn(&FieldValue) -> Result<(), String> + Send + Sync + 'static {
    move |value| {
        let ids = value
            .as_references()
            .ok_or_else(|| "must be a list of ids".to_string())?;

        if ids.len() > max {
            return Err(format!("must not contain more than {} items, got {}", max, ids.len()));
        }

        Ok(())
    }
}

fn expect_text(value: &FieldValue) -> Result<&str, String> {
    value.as_text().ok_or_else(|| "must be text".to_string())
}
