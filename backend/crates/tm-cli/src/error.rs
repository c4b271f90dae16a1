use crate::{EXIT_FAILURE, EXIT_REJECTED};

use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;
use tm_config::ConfigError;
use tm_core::{CoreError, MergeError};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {}: {source} {location}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Invalid JSON in {}: {source} {location}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid request in {}: {source} {location}", .path.display())]
    Request {
        path: PathBuf,
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Invalid task query: {source} {location}")]
    Query {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Output error: {source} {location}")]
    Output {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Merge(#[from] MergeError),
}

impl CliError {
    #[track_caller]
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        CliError::Read {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        CliError::Json {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn request(path: &Path, source: CoreError) -> Self {
        CliError::Request {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn query(source: CoreError) -> Self {
        CliError::Query {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Merge(MergeError::Rejected { .. }) => EXIT_REJECTED,
            _ => EXIT_FAILURE,
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CliError::Output {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
