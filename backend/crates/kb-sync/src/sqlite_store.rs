use crate::{BoardStore, Result, SyncError, hydrate};

use kb_core::{Board, BoardPatch, BoardWithColumns, Column, ColumnWithTasks, NewBoard, NewTask, Task};
use kb_db::{BoardRepository, ColumnRepository, TaskRepository};

use async_trait::async_trait;
use log::debug;
use sqlx::SqlitePool;
use uuid::Uuid;

/// `BoardStore` backed by the SQLite repositories.
#[derive(Clone)]
pub struct SqliteBoardStore {
    pool: SqlitePool,
}

impl SqliteBoardStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl BoardStore for SqliteBoardStore {
    async fn fetch_board_with_columns(
        &self,
        user_id: &str,
        board_id: Uuid,
    ) -> Result<BoardWithColumns> {
        // One transaction so columns and tasks come from the same snapshot
        let mut tx = self.pool.begin().await?;

        let board = BoardRepository::find_for_user(&mut *tx, board_id, user_id)
            .await?
            .ok_or_else(|| SyncError::not_found("Board", board_id))?;
        let columns = ColumnRepository::find_by_board(&mut *tx, board_id).await?;
        let tasks = TaskRepository::find_by_board(&mut *tx, board_id).await?;

        tx.commit().await?;

        debug!(
            "Fetched board {} with {} columns and {} tasks",
            board_id,
            columns.len(),
            tasks.len()
        );

        Ok(hydrate::assemble(board, columns, tasks))
    }

    async fn persist_move(&self, task_id: Uuid, new_column_id: Uuid, new_order: i32) -> Result<()> {
        if new_order < 0 {
            return Err(SyncError::validation(format!(
                "task position must be non-negative, got {}",
                new_order
            )));
        }

        let mut tx = self.pool.begin().await?;

        let task = TaskRepository::find_by_id(&mut *tx, task_id)
            .await?
            .ok_or_else(|| SyncError::not_found("Task", task_id))?;
        let target = ColumnRepository::find_by_id(&mut *tx, new_column_id)
            .await?
            .ok_or_else(|| SyncError::not_found("Column", new_column_id))?;
        let source = ColumnRepository::find_by_id(&mut *tx, task.column_id)
            .await?
            .ok_or_else(|| SyncError::not_found("Column", task.column_id))?;

        if source.board_id != target.board_id {
            return Err(SyncError::validation(
                "tasks cannot move between boards",
            ));
        }

        // Close the gap in the source, then open the slot in the target
        TaskRepository::close_gap(&mut *tx, task.column_id, task.sort_order, task_id).await?;

        let siblings = TaskRepository::count_in_column(&mut *tx, new_column_id, Some(task_id)).await?;
        let order = new_order.min(i32::try_from(siblings).unwrap_or(i32::MAX));

        TaskRepository::open_slot(&mut *tx, new_column_id, order, task_id).await?;
        TaskRepository::set_placement(&mut *tx, task_id, new_column_id, order, kb_core::now())
            .await?;

        tx.commit().await?;

        debug!(
            "Persisted move of task {} to column {} at {}",
            task_id, new_column_id, order
        );

        Ok(())
    }

    async fn create_task(&self, new_task: NewTask) -> Result<Task> {
        let new_task = new_task
            .validated()
            .map_err(|e| SyncError::validation(e.to_string()))?;

        ColumnRepository::find_by_id(&self.pool, new_task.column_id)
            .await?
            .ok_or_else(|| SyncError::not_found("Column", new_task.column_id))?;

        let task = Task::from_new(new_task);
        TaskRepository::create(&self.pool, &task).await?;

        debug!(
            "Created task {} in column {} at {}",
            task.id, task.column_id, task.sort_order
        );

        Ok(task)
    }

    async fn update_board(
        &self,
        user_id: &str,
        board_id: Uuid,
        patch: BoardPatch,
    ) -> Result<Board> {
        let patch = patch
            .validated()
            .map_err(|e| SyncError::validation(e.to_string()))?;

        let mut tx = self.pool.begin().await?;

        let mut board = BoardRepository::find_for_user(&mut *tx, board_id, user_id)
            .await?
            .ok_or_else(|| SyncError::not_found("Board", board_id))?;

        if board.apply_patch(&patch) {
            BoardRepository::update(&mut *tx, &board).await?;
            debug!("Updated board {}", board_id);
        }

        tx.commit().await?;

        Ok(board)
    }

    async fn list_boards(&self, user_id: &str) -> Result<Vec<Board>> {
        Ok(BoardRepository::find_by_user(&self.pool, user_id).await?)
    }

    async fn create_board_with_default_columns(
        &self,
        new_board: NewBoard,
        column_titles: &[String],
    ) -> Result<BoardWithColumns> {
        let title = new_board.title.trim().to_string();
        if title.is_empty() {
            return Err(SyncError::validation("board title cannot be empty"));
        }

        let board = Board::new(NewBoard { title, ..new_board });

        let mut tx = self.pool.begin().await?;

        BoardRepository::create(&mut *tx, &board).await?;

        let mut columns = Vec::with_capacity(column_titles.len());
        for (position, column_title) in column_titles.iter().enumerate() {
            let column = Column::new(
                board.id,
                column_title.clone(),
                i32::try_from(position).unwrap_or(i32::MAX),
            );
            ColumnRepository::create(&mut *tx, &column).await?;
            columns.push(ColumnWithTasks::empty(column));
        }

        tx.commit().await?;

        debug!(
            "Created board {} with {} default columns",
            board.id,
            columns.len()
        );

        Ok(BoardWithColumns { board, columns })
    }
}
