use crate::Result;

use kb_core::{Board, BoardPatch, BoardWithColumns, NewBoard, NewTask, Task};

use async_trait::async_trait;
use uuid::Uuid;

/// Record-level access to boards, columns and tasks.
///
/// Implementations guarantee that columns come back ordered by position and
/// that each column's tasks are ordered by position.
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Board, its columns and their tasks in one read.
    /// Fails with `NotFound` when the board does not exist for this user.
    async fn fetch_board_with_columns(
        &self,
        user_id: &str,
        board_id: Uuid,
    ) -> Result<BoardWithColumns>;

    /// Set a task's column and position atomically.
    async fn persist_move(&self, task_id: Uuid, new_column_id: Uuid, new_order: i32) -> Result<()>;

    /// Insert one task and return the stored record.
    async fn create_task(&self, new_task: NewTask) -> Result<Task>;

    /// Apply a partial update and return the resulting board.
    async fn update_board(&self, user_id: &str, board_id: Uuid, patch: BoardPatch)
    -> Result<Board>;

    /// Boards owned by `user_id`, newest first.
    async fn list_boards(&self, user_id: &str) -> Result<Vec<Board>>;

    /// Insert a board together with its initial columns.
    async fn create_board_with_default_columns(
        &self,
        new_board: NewBoard,
        column_titles: &[String],
    ) -> Result<BoardWithColumns>;
}
