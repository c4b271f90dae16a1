use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Update intent for a single field.
///
/// A missing JSON key decodes to `Absent` (via `#[serde(default)]`), an explicit
/// `null` to `Null`, anything else to `Present`.
///
/// ```
/// use serde::Deserialize;
/// use tm_core::FieldState;
///
/// #[derive(Deserialize)]
/// struct Patch {
///     #[serde(default)]
///     title: FieldState<String>,
///     #[serde(default)]
///     content: FieldState<String>,
/// }
///
/// let patch: Patch = serde_json::from_str(r#"{"content": null}"#).unwrap();
/// assert!(patch.title.is_absent());
/// assert!(patch.content.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldState<T> {
    Absent,
    Null,
    Present(T),
}

impl<T> Default for FieldState<T> {
    fn default() -> Self {
        FieldState::Absent
    }
}

impl<T> FieldState<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldState::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldState::Null)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, FieldState::Present(_))
    }

    pub fn as_present(&self) -> Option<&T> {
        match self {
            FieldState::Present(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> FieldState<&T> {
        match self {
            FieldState::Absent => FieldState::Absent,
            FieldState::Null => FieldState::Null,
            FieldState::Present(value) => FieldState::Present(value),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FieldState<U> {
        match self {
            FieldState::Absent => FieldState::Absent,
            FieldState::Null => FieldState::Null,
            FieldState::Present(value) => FieldState::Present(f(value)),
        }
    }

    /// `None` = absent, `Some(None)` = null, `Some(Some(v))` = present.
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            FieldState::Absent => None,
            FieldState::Null => Some(None),
            FieldState::Present(value) => Some(Some(value)),
        }
    }
}

impl<T> From<Option<Option<T>>> for FieldState<T> {
    fn from(value: Option<Option<T>>) -> Self {
        match value {
            None => FieldState::Absent,
            Some(None) => FieldState::Null,
            Some(Some(value)) => FieldState::Present(value),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldState<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present; absence is handled by `default`.
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => FieldState::Present(value),
            None => FieldState::Null,
        })
    }
}

impl<T: Serialize> Serialize for FieldState<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FieldState::Present(value) => serializer.serialize_some(value),
            // Absent fields are expected to be skipped with `skip_serializing_if`
            FieldState::Absent | FieldState::Null => serializer.serialize_none(),
        }
    }
}
