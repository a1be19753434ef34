#![allow(dead_code)]

use kb_core::{Board, Column, NewBoard, NewTask, Priority, Task};

use sqlx::SqlitePool;
use uuid::Uuid;

use kb_db::{BoardRepository, ColumnRepository, TaskRepository};

pub const TEST_USER: &str = "user_test";

/// Creates a test Board owned by `user_id`
pub fn create_test_board(user_id: &str) -> Board {
    Board::new(NewBoard {
        title: "Test Board".to_string(),
        description: Some("Test board description".to_string()),
        color: None,
        user_id: user_id.to_string(),
    })
}

/// Creates a test Task with sensible defaults
pub fn create_test_task(column_id: Uuid, title: &str, sort_order: i32) -> Task {
    let mut input = NewTask::new(column_id, title, sort_order);
    input.priority = Priority::High;
    Task::from_new(input)
}

/// Inserts a board with one column per entry of `columns`, each holding the
/// listed task titles in order. Returns the board and its columns.
pub async fn seed_board(pool: &SqlitePool, columns: &[(&str, Vec<&str>)]) -> (Board, Vec<Column>) {
    let board = create_test_board(TEST_USER);
    BoardRepository::create(pool, &board).await.unwrap();

    let mut created = Vec::new();
    for (position, (title, tasks)) in columns.iter().enumerate() {
        let column = Column::new(board.id, title.to_string(), position as i32);
        ColumnRepository::create(pool, &column).await.unwrap();
        for (order, task_title) in tasks.iter().enumerate() {
            let task = create_test_task(column.id, task_title, order as i32);
            TaskRepository::create(pool, &task).await.unwrap();
        }
        created.push(column);
    }

    (board, created)
}

/// Titles of the tasks in a column, in stored order.
pub async fn column_titles(pool: &SqlitePool, board_id: Uuid, column_id: Uuid) -> Vec<String> {
    TaskRepository::find_by_board(pool, board_id)
        .await
        .unwrap()
        .into_iter()
        .filter(|t| t.column_id == column_id)
        .map(|t| t.title)
        .collect()
}
