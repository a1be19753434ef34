use kb_core::{NewBoard, NewTask, Priority};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task fields supplied by the user. Column and position are decided by the
/// state manager.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTaskInput {
    pub title: String,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
}

impl NewTaskInput {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub(crate) fn into_new_task(self, column_id: Uuid, sort_order: i32) -> NewTask {
        NewTask {
            column_id,
            title: self.title,
            description: self.description,
            assignee: self.assignee,
            due_date: self.due_date,
            priority: self.priority,
            sort_order,
        }
    }
}

/// Board fields supplied by the user. The owner comes from the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBoardInput {
    pub title: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl NewBoardInput {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub(crate) fn into_new_board(self, user_id: &str) -> NewBoard {
        NewBoard {
            title: self.title,
            description: self.description,
            color: self.color,
            user_id: user_id.to_string(),
        }
    }
}
