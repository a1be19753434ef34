use kb_board::BoardError;
use kb_config::ConfigError;
use kb_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source} {location}")]
    Config {
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        source: DbError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Board {
        source: BoardError,
        location: ErrorLocation,
    },

    #[error("No user identity: pass --user-id, set KB_AUTH_USER_ID, or set [auth] user_id {location}")]
    MissingIdentity { location: ErrorLocation },

    #[error("JSON error: {source} {location}")]
    Json {
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn missing_identity() -> Self {
        Self::MissingIdentity {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for CliError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<BoardError> for CliError {
    #[track_caller]
    fn from(source: BoardError) -> Self {
        Self::Board {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
