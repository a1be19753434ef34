use crate::{Board, ColumnWithTasks};

use serde::{Deserialize, Serialize};

/// Result of one hydration read: a board and its ordered columns with tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardWithColumns {
    pub board: Board,
    pub columns: Vec<ColumnWithTasks>,
}

impl BoardWithColumns {
    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}
