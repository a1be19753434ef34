//! In-memory state of one board and the optimistic update protocol.
//!
//! The manager holds two views of the columns. `committed` reflects every
//! applied move. `preview` is a transient copy that a drag gesture mutates
//! while the pointer moves; it is shown instead of `committed` while present
//! and is dropped when the gesture ends. Only `move_task` talks to the store
//! about positions, and it always applies to `committed`.

use crate::{BoardError, NewTaskInput, Result, SyncStatus};

use kb_core::{Board, BoardPatch, ColumnWithTasks, Placement, Task, reorder};
use kb_sync::Session;

use log::{debug, info, warn};
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct BoardStateManager {
    session: Option<Session>,
    board_id: Option<Uuid>,
    board: Option<Board>,
    committed: Vec<ColumnWithTasks>,
    preview: Option<Vec<ColumnWithTasks>>,
    loading: bool,
    error: Option<BoardError>,
    sync: SyncStatus,
}

impl BoardStateManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: Some(session),
            ..Self::default()
        }
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// Attach the session for a newly known identity. Switching to a
    /// different user drops the loaded board.
    pub fn set_session(&mut self, session: Session) {
        let same_user = self
            .session
            .as_ref()
            .is_some_and(|current| current.identity() == session.identity());
        if !same_user {
            self.reset();
        }
        self.session = Some(session);
    }

    /// Identity lost: forget the session and everything loaded under it.
    pub fn clear_session(&mut self) {
        self.session = None;
        self.reset();
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    fn reset(&mut self) {
        self.board_id = None;
        self.board = None;
        self.committed.clear();
        self.preview = None;
        self.loading = false;
        self.error = None;
        self.sync = SyncStatus::Synced;
    }

    #[track_caller]
    fn require_session(&self) -> Result<Session> {
        self.session.clone().ok_or_else(BoardError::not_signed_in)
    }

    /// Session check plus the load-error gate shared by every mutation.
    #[track_caller]
    fn require_ready(&self) -> Result<(Session, Uuid)> {
        let session = self.require_session()?;

        if let Some(BoardError::Load {
            board_id, message, ..
        }) = &self.error
        {
            return Err(BoardError::load(*board_id, message.clone()));
        }

        let board_id = self
            .board
            .as_ref()
            .map(|b| b.id)
            .ok_or_else(|| BoardError::validation("no board loaded"))?;

        Ok((session, board_id))
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Fetch the board with its columns and tasks and replace local state.
    pub async fn load(&mut self, board_id: Uuid) -> Result<()> {
        let session = self.require_session()?;

        self.loading = true;
        self.board_id = Some(board_id);

        let fetched = session
            .store()
            .fetch_board_with_columns(session.user_id(), board_id)
            .await;

        self.loading = false;
        self.preview = None;

        match fetched {
            Ok(loaded) => {
                info!(
                    "Loaded board {} ({} columns, {} tasks)",
                    board_id,
                    loaded.columns.len(),
                    loaded.total_tasks()
                );
                self.board = Some(loaded.board);
                self.committed = loaded.columns;
                self.error = None;
                self.sync = SyncStatus::Synced;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load board {}: {}", board_id, e);
                let message = e.to_string();
                self.board = None;
                self.committed.clear();
                self.error = Some(BoardError::load(board_id, message.clone()));
                Err(BoardError::load(board_id, message))
            }
        }
    }

    /// Re-fetch the current board. Clears a dirty sync state on success.
    pub async fn reload(&mut self) -> Result<()> {
        let board_id = self
            .board_id
            .ok_or_else(|| BoardError::validation("no board to reload"))?;
        self.load(board_id).await
    }

    // =========================================================================
    // Preview
    // =========================================================================

    /// Start a preview from the committed columns. A running preview is kept.
    pub fn begin_preview(&mut self) {
        if self.preview.is_none() {
            self.preview = Some(self.committed.clone());
        }
    }

    pub fn discard_preview(&mut self) {
        if self.preview.take().is_some() {
            debug!("Discarded drag preview");
        }
    }

    pub fn has_preview(&self) -> bool {
        self.preview.is_some()
    }

    /// Live reorder inside one column. Only the preview changes; the store is
    /// never called. Returns false if the task is not in that column.
    pub fn reorder_within_column(
        &mut self,
        task_id: Uuid,
        source_column_id: Uuid,
        new_index: usize,
    ) -> bool {
        self.begin_preview();
        match self.preview.as_mut() {
            Some(preview) => {
                reorder::reorder_within_column(preview, task_id, source_column_id, new_index)
            }
            None => false,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Finalize a task placement.
    ///
    /// The preview is discarded and the move is applied to committed state
    /// before the store is called. If the store rejects it, the local change
    /// stays and the manager turns `Dirty` until the next successful load.
    pub async fn move_task(
        &mut self,
        task_id: Uuid,
        target_column_id: Uuid,
        target_index: usize,
    ) -> Result<Placement> {
        let (session, _) = self.require_ready()?;

        self.discard_preview();

        let placement =
            reorder::move_task(&mut self.committed, task_id, target_column_id, target_index)?;
        if !placement.changed {
            debug!("Task {} already at requested placement", task_id);
            return Ok(placement);
        }

        let persisted = session
            .store()
            .persist_move(task_id, placement.column_id, placement.sort_order())
            .await;

        match persisted {
            Ok(()) => {
                debug!(
                    "Moved task {} to column {} at {}",
                    task_id, placement.column_id, placement.index
                );
                Ok(placement)
            }
            Err(e) => {
                let message = e.to_string();
                warn!(
                    "Persisting move of task {} failed, board is now out of sync: {}",
                    task_id, message
                );
                self.sync = SyncStatus::Dirty {
                    task_id,
                    message: message.clone(),
                };
                self.error = Some(BoardError::persist(message.clone()));
                Err(BoardError::persist(message))
            }
        }
    }

    /// Create a task at the tail of `column_id`.
    pub async fn create_task(&mut self, column_id: Uuid, input: NewTaskInput) -> Result<Task> {
        let (session, _) = self.require_ready()?;

        let ci = reorder::find_column(&self.committed, column_id)
            .ok_or_else(|| BoardError::column_not_found(column_id))?;
        let sort_order = i32::try_from(self.committed[ci].tasks.len()).unwrap_or(i32::MAX);

        let new_task = input.into_new_task(column_id, sort_order).validated()?;

        let task = session
            .store()
            .create_task(new_task)
            .await
            .map_err(BoardError::from_store_write)?;

        if let Some(preview) = self.preview.as_mut()
            && let Some(pi) = reorder::find_column(preview, column_id)
        {
            preview[pi].tasks.push(task.clone());
        }
        self.committed[ci].tasks.push(task.clone());

        debug!(
            "Created task {} in column {} at {}",
            task.id, column_id, task.sort_order
        );

        Ok(task)
    }

    /// Persist a partial board update and replace the local board.
    pub async fn update_board(&mut self, patch: BoardPatch) -> Result<Board> {
        let (session, board_id) = self.require_ready()?;

        let patch = patch.validated()?;

        let board = session
            .store()
            .update_board(session.user_id(), board_id, patch)
            .await
            .map_err(BoardError::from_store_write)?;

        self.board = Some(board.clone());
        Ok(board)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn board_id(&self) -> Option<Uuid> {
        self.board_id
    }

    /// Columns to display: the preview while a drag is running, otherwise the
    /// committed columns.
    pub fn columns(&self) -> &[ColumnWithTasks] {
        self.preview.as_deref().unwrap_or(&self.committed)
    }

    pub fn committed_columns(&self) -> &[ColumnWithTasks] {
        &self.committed
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Last failure. A persist failure stays recorded alongside the `Dirty`
    /// sync status until the next successful load, even if later moves
    /// succeed.
    pub fn error(&self) -> Option<&BoardError> {
        self.error.as_ref()
    }

    pub fn sync_status(&self) -> &SyncStatus {
        &self.sync
    }

    pub fn total_tasks(&self) -> usize {
        self.committed.iter().map(|c| c.tasks.len()).sum()
    }

    pub fn column(&self, column_id: Uuid) -> Option<&ColumnWithTasks> {
        self.columns().iter().find(|c| c.column.id == column_id)
    }
}
