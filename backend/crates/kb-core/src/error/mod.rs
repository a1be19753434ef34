use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid priority: {value} {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid due date: {value} {location}")]
    InvalidDueDate {
        value: String,
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

    #[error("UUID parse error: {source} {location}")]
    Uuid {
        source: uuid::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
pub type CoreResult<T> = StdResult<T, CoreError>;
