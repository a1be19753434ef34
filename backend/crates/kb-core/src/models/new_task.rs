use crate::{CoreError, CoreResult, Priority};

use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Input for creating a task. `sort_order` is assigned by the caller from the
/// column's task count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub column_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub sort_order: i32,
}

impl NewTask {
    pub fn new(column_id: Uuid, title: impl Into<String>, sort_order: i32) -> Self {
        Self {
            column_id,
            title: title.into(),
            description: None,
            assignee: None,
            due_date: None,
            priority: Priority::default(),
            sort_order,
        }
    }

    /// Trims text fields, drops blank optionals, and rejects a blank title.
    #[track_caller]
    pub fn validated(mut self) -> CoreResult<Self> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CoreError::Validation {
                message: "task title cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sort_order < 0 {
            return Err(CoreError::Validation {
                message: format!("sort_order must be non-negative, got {}", self.sort_order),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.title = title.to_string();
        self.description = non_blank(self.description);
        self.assignee = non_blank(self.assignee);
        Ok(self)
    }

    /// Parse a due date in `YYYY-MM-DD` form.
    #[track_caller]
    pub fn parse_due_date(value: &str) -> CoreResult<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
            CoreError::InvalidDueDate {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
