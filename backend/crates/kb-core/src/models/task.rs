use crate::{NewTask, Priority};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub column_id: Uuid,

    // Core fields
    pub title: String,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,

    /// Zero-based rank among tasks sharing `column_id`
    pub sort_order: i32,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Build a task record from creation input, generating id and timestamps.
    pub fn from_new(new_task: NewTask) -> Self {
        let now = crate::now();
        Self {
            id: Uuid::new_v4(),
            column_id: new_task.column_id,
            title: new_task.title,
            description: new_task.description,
            assignee: new_task.assignee,
            due_date: new_task.due_date,
            priority: new_task.priority,
            sort_order: new_task.sort_order,
            created_at: now,
            updated_at: now,
        }
    }
}
