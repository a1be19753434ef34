use kb_core::CoreError;
use kb_sync::SyncError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Failed to load board {board_id}: {message} {location}")]
    Load {
        board_id: Uuid,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to load boards: {message} {location}")]
    LoadList {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not authenticated: {message} {location}")]
    Auth {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to persist change: {message} {location}")]
    Persist {
        message: String,
        location: ErrorLocation,
    },

    #[error("Task not found: {task_id} {location}")]
    TaskNotFound {
        task_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Column not found: {column_id} {location}")]
    ColumnNotFound {
        column_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },
}

impl BoardError {
    #[track_caller]
    pub fn load(board_id: Uuid, message: impl Into<String>) -> Self {
        Self::Load {
            board_id,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn load_list(message: impl Into<String>) -> Self {
        Self::LoadList {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn persist(message: impl Into<String>) -> Self {
        Self::Persist {
            message: message.into(),
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
    pub fn task_not_found(task_id: Uuid) -> Self {
        Self::TaskNotFound {
            task_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn column_not_found(column_id: Uuid) -> Self {
        Self::ColumnNotFound {
            column_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_signed_in() -> Self {
        Self::auth("no user session")
    }

    /// Map a store failure on a write. Validation failures keep their
    /// category; everything else is a persistence failure.
    #[track_caller]
    pub fn from_store_write(err: SyncError) -> Self {
        match err {
            SyncError::Validation { message, .. } => Self::validation(message),
            other => Self::persist(other.to_string()),
        }
    }

    pub fn is_load(&self) -> bool {
        matches!(self, Self::Load { .. } | Self::LoadList { .. })
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    pub fn is_persist(&self) -> bool {
        matches!(self, Self::Persist { .. })
    }
}

impl From<CoreError> for BoardError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            CoreError::TaskNotFound { task_id, .. } => Self::TaskNotFound { task_id, location },
            CoreError::ColumnNotFound { column_id, .. } => {
                Self::ColumnNotFound { column_id, location }
            }
            CoreError::Validation { message, .. } => Self::Validation { message, location },
            other => Self::Validation {
                message: other.to_string(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
