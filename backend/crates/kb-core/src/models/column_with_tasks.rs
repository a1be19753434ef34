use crate::{Column, Task};

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A column together with its tasks, ordered by ascending `sort_order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnWithTasks {
    #[serde(flatten)]
    pub column: Column,
    pub tasks: Vec<Task>,
}

impl ColumnWithTasks {
    pub fn new(column: Column, tasks: Vec<Task>) -> Self {
        Self { column, tasks }
    }

    pub fn empty(column: Column) -> Self {
        Self {
            column,
            tasks: Vec::new(),
        }
    }

    pub fn task_index(&self, task_id: Uuid) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == task_id)
    }

    pub fn contains(&self, task_id: Uuid) -> bool {
        self.task_index(task_id).is_some()
    }

    pub fn task_ids(&self) -> Vec<Uuid> {
        self.tasks.iter().map(|t| t.id).collect()
    }
}

impl Deref for ColumnWithTasks {
    type Target = Column;

    fn deref(&self) -> &Self::Target {
        &self.column
    }
}
