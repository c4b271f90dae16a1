use crate::FieldKind;

use serde::Serialize;

/// One entry in an entity's field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Immutable fields (identifier, creation timestamp) cannot be patched
    pub mutable: bool,
}

impl FieldSpec {
    pub const fn mutable(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            mutable: true,
        }
    }

    pub const fn read_only(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            mutable: false,
        }
    }
}
