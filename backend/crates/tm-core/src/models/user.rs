use crate::engine::entity::{optional_text, required_text, unknown_field};
use crate::{Entity, FieldKind, FieldSpec, FieldValue, Result as CoreResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const USER_SCHEMA: &[FieldSpec] = &[
    FieldSpec::read_only("id", FieldKind::Reference),
    FieldSpec::mutable("email", FieldKind::Text),
    FieldSpec::mutable("first_name", FieldKind::Text),
    FieldSpec::mutable("last_name", FieldKind::Text),
    FieldSpec::read_only("created_at", FieldKind::Text),
];

/// User profile. Credentials live with the auth layer, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String) -> Self {
        Self {
            email,
            ..Self::blank(Uuid::new_v4(), Utc::now())
        }
    }
}

impl Entity for User {
    const KIND: &'static str = "user";

    fn schema() -> &'static [FieldSpec] {
        USER_SCHEMA
    }

    fn blank(id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email: String::new(),
            first_name: None,
            last_name: None,
            created_at,
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn get(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::Reference(self.id)),
            "email" => Some(FieldValue::Text(self.email.clone())),
            "first_name" => self.first_name.clone().map(FieldValue::Text),
            "last_name" => self.last_name.clone().map(FieldValue::Text),
            "created_at" => Some(FieldValue::Text(self.created_at.to_rfc3339())),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Option<FieldValue>) -> CoreResult<()> {
        match field {
            "email" => self.email = required_text(Self::KIND, field, value)?,
            "first_name" => self.first_name = optional_text(Self::KIND, field, value)?,
            "last_name" => self.last_name = optional_text(Self::KIND, field, value)?,
            _ => return Err(unknown_field(Self::KIND, field)),
        }
        Ok(())
    }
}
