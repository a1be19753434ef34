use kb_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("{entity} not found: {id} {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Db {
        source: DbError,
        location: ErrorLocation,
    },

    /// Failure reported by a store that is not backed by the local database,
    /// such as a hosted backend or a test double.
    #[error("Remote store error: {message} {location}")]
    Remote {
        message: String,
        location: ErrorLocation,
    },
}

impl SyncError {
    #[track_caller]
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<DbError> for SyncError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Db {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for SyncError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Db {
            source: DbError::from(source),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
