
use kb_core::{
    Board, BoardPatch, BoardWithColumns, Column, ColumnWithTasks, NewBoard, NewTask, Task, reorder,
};
use kb_sync::{BoardStore, Identity, Session, SyncError};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

pub const TEST_USER: &str = "user_test";

/// In-memory `BoardStore` recording persist calls, with switchable failures.
#[derive(Default)]
pub struct FakeStore {
    boards: Mutex<Vec<BoardWithColumns>>,
    moves: Mutex<Vec<(Uuid, Uuid, i32)>>,
    fail_persist: AtomicBool,
    fail_fetch: AtomicBool,
}

impl FakeStore {
    pub fn insert(&self, board: BoardWithColumns) {
        self.boards.lock().unwrap().push(board);
    }

    pub fn moves(&self) -> Vec<(Uuid, Uuid, i32)> {
        self.moves.lock().unwrap().clone()
    }

    pub fn fail_persist(&self, fail: bool) {
        self.fail_persist.store(fail, Ordering::SeqCst);
    }

    pub fn fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    fn with_board<T>(
        &self,
        pred: impl Fn(&BoardWithColumns) -> bool,
        f: impl FnOnce(&mut BoardWithColumns) -> T,
    ) -> Option<T> {
        let mut boards = self.boards.lock().unwrap();
        boards.iter_mut().find(|b| pred(b)).map(f)
    }
}

#[async_trait]
impl BoardStore for FakeStore {
    async fn fetch_board_with_columns(
        &self,
        user_id: &str,
        board_id: Uuid,
    ) -> kb_sync::Result<BoardWithColumns> {
        tokio::task::yield_now().await;
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(SyncError::remote("store unreachable"));
        }
        self.with_board(
            |b| b.board.id == board_id && b.board.user_id == user_id,
            |b| b.clone(),
        )
        .ok_or_else(|| SyncError::not_found("Board", board_id))
    }

    async fn persist_move(
        &self,
        task_id: Uuid,
        new_column_id: Uuid,
        new_order: i32,
    ) -> kb_sync::Result<()> {
        tokio::task::yield_now().await;
        self.moves
            .lock()
            .unwrap()
            .push((task_id, new_column_id, new_order));
        if self.fail_persist.load(Ordering::SeqCst) {
            return Err(SyncError::remote("write rejected"));
        }
        self.with_board(
            |b| reorder::find_task(&b.columns, task_id).is_some(),
            |b| reorder::move_task(&mut b.columns, task_id, new_column_id, new_order as usize),
        )
        .ok_or_else(|| SyncError::not_found("Task", task_id))?
        .map(|_| ())
        .map_err(|e| SyncError::validation(e.to_string()))
    }

    async fn create_task(&self, new_task: NewTask) -> kb_sync::Result<Task> {
        tokio::task::yield_now().await;
        let new_task = new_task
            .validated()
            .map_err(|e| SyncError::validation(e.to_string()))?;
        let column_id = new_task.column_id;
        let task = Task::from_new(new_task);
        let stored = task.clone();
        self.with_board(
            |b| reorder::find_column(&b.columns, column_id).is_some(),
            move |b| {
                if let Some(ci) = reorder::find_column(&b.columns, column_id) {
                    b.columns[ci].tasks.push(stored);
                }
            },
        )
        .ok_or_else(|| SyncError::not_found("Column", column_id))?;
        Ok(task)
    }

    async fn update_board(
        &self,
        user_id: &str,
        board_id: Uuid,
        patch: BoardPatch,
    ) -> kb_sync::Result<Board> {
        tokio::task::yield_now().await;
        self.with_board(
            |b| b.board.id == board_id && b.board.user_id == user_id,
            |b| {
                b.board.apply_patch(&patch);
                b.board.clone()
            },
        )
        .ok_or_else(|| SyncError::not_found("Board", board_id))
    }

    async fn list_boards(&self, user_id: &str) -> kb_sync::Result<Vec<Board>> {
        tokio::task::yield_now().await;
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(SyncError::remote("store unreachable"));
        }
        let mut boards: Vec<Board> = self
            .boards
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.board.user_id == user_id)
            .map(|b| b.board.clone())
            .collect();
        boards.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(boards)
    }

    async fn create_board_with_default_columns(
        &self,
        new_board: NewBoard,
        column_titles: &[String],
    ) -> kb_sync::Result<BoardWithColumns> {
        tokio::task::yield_now().await;
        let board = Board::new(new_board);
        let columns = column_titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                ColumnWithTasks::empty(Column::new(board.id, title.clone(), i as i32))
            })
            .collect();
        let created = BoardWithColumns { board, columns };
        self.insert(created.clone());
        Ok(created)
    }
}

/// Board whose columns hold the listed task titles in order.
pub fn board_with(columns: &[(&str, Vec<&str>)]) -> BoardWithColumns {
    let board = Board::new(NewBoard {
        title: "Sprint".to_string(),
        description: None,
        color: None,
        user_id: TEST_USER.to_string(),
    });
    let columns = columns
        .iter()
        .enumerate()
        .map(|(ci, (title, tasks))| {
            let column = Column::new(board.id, title.to_string(), ci as i32);
            let tasks = tasks
                .iter()
                .enumerate()
                .map(|(ti, t)| Task::from_new(NewTask::new(column.id, *t, ti as i32)))
                .collect();
            ColumnWithTasks::new(column, tasks)
        })
        .collect();
    BoardWithColumns { board, columns }
}

pub fn session_for(store: Arc<FakeStore>) -> Session {
    Session::new(Identity::new(TEST_USER), store)
}

pub fn titles(columns: &[ColumnWithTasks], column_index: usize) -> Vec<String> {
    columns[column_index]
        .tasks
        .iter()
        .map(|t| t.title.clone())
        .collect()
}

pub fn task_id(columns: &[ColumnWithTasks], title: &str) -> Uuid {
    columns
        .iter()
        .flat_map(|c| c.tasks.iter())
        .find(|t| t.title == title)
        .map(|t| t.id)
        .unwrap()
}

pub fn column_id(columns: &[ColumnWithTasks], title: &str) -> Uuid {
    columns
        .iter()
        .find(|c| c.column.title == title)
        .map(|c| c.column.id)
        .unwrap()
}

/// Store seeded with one board plus a manager that has loaded it.
pub async fn loaded_manager(
    columns: &[(&str, Vec<&str>)],
) -> (Arc<FakeStore>, crate::BoardStateManager) {
    let store = Arc::new(FakeStore::default());
    let seeded = board_with(columns);
    let board_id = seeded.board.id;
    store.insert(seeded);

    let mut manager = crate::BoardStateManager::with_session(session_for(store.clone()));
    manager.load(board_id).await.unwrap();
    (store, manager)
}
