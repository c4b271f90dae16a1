mod merge_error;

pub use merge_error::MergeError;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid entity kind: {value} {location}")]
    InvalidEntityKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid query parameter {param}: {message} {location}")]
    InvalidQuery {
        param: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot write {entity}.{field}: {message} {location}")]
    FieldWrite {
        entity: &'static str,
        field: String,
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn decode<S: Into<String>>(message: S) -> Self {
        CoreError::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_query<S: Into<String>>(param: &str, message: S) -> Self {
        CoreError::InvalidQuery {
            param: param.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn field_write<S: Into<String>>(entity: &'static str, field: &str, message: S) -> Self {
        CoreError::FieldWrite {
            entity,
            field: field.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CoreError::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
