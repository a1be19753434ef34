use kb_core::{ColumnWithTasks, Priority, Task};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Read-only task filter. An empty filter matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    /// Any of these priorities; empty means all
    pub priorities: Vec<Priority>,
    /// Tasks due on or before this date. Tasks without a due date never match.
    pub due_on_or_before: Option<NaiveDate>,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        if !self.priorities.contains(&priority) {
            self.priorities.push(priority);
        }
        self
    }

    pub fn due_on_or_before(mut self, date: NaiveDate) -> Self {
        self.due_on_or_before = Some(date);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty() && self.due_on_or_before.is_none()
    }

    pub fn matches(&self, task: &Task) -> bool {
        if !self.priorities.is_empty() && !self.priorities.contains(&task.priority) {
            return false;
        }
        match self.due_on_or_before {
            Some(limit) => task.due_date.is_some_and(|due| due <= limit),
            None => true,
        }
    }

    /// Matching tasks of `column`, in column order.
    pub fn apply<'a>(&self, column: &'a ColumnWithTasks) -> Vec<&'a Task> {
        column.tasks.iter().filter(|t| self.matches(t)).collect()
    }
}
