//! A board state manager shared between tasks.
//!
//! `tokio::sync::Mutex` queues waiters in FIFO order, so mutations submitted
//! concurrently run one after another in arrival order, each seeing the
//! state left by the previous one.

use crate::{BoardStateManager, NewTaskInput, Result};

use kb_core::{ColumnWithTasks, Placement, Task};

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SharedBoard {
    inner: Arc<Mutex<BoardStateManager>>,
}

impl SharedBoard {
    pub fn new(manager: BoardStateManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    /// Exclusive access for a sequence of calls, e.g. a whole drag gesture.
    pub async fn lock(&self) -> MutexGuard<'_, BoardStateManager> {
        self.inner.lock().await
    }

    pub async fn load(&self, board_id: Uuid) -> Result<()> {
        self.inner.lock().await.load(board_id).await
    }

    pub async fn move_task(
        &self,
        task_id: Uuid,
        target_column_id: Uuid,
        target_index: usize,
    ) -> Result<Placement> {
        self.inner
            .lock()
            .await
            .move_task(task_id, target_column_id, target_index)
            .await
    }

    pub async fn create_task(&self, column_id: Uuid, input: NewTaskInput) -> Result<Task> {
        self.inner.lock().await.create_task(column_id, input).await
    }

    /// Copy of the columns currently displayed.
    pub async fn snapshot(&self) -> Vec<ColumnWithTasks> {
        self.inner.lock().await.columns().to_vec()
    }
}
