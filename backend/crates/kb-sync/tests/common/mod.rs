#![allow(dead_code)]

use kb_core::{BoardWithColumns, NewBoard, NewTask, Task};
use kb_sync::{BoardStore, SqliteBoardStore};

use uuid::Uuid;

pub const TEST_USER: &str = "user_test";

pub async fn create_test_store() -> SqliteBoardStore {
    let pool = kb_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");
    SqliteBoardStore::new(pool)
}

pub fn new_board(title: &str) -> NewBoard {
    NewBoard {
        title: title.to_string(),
        description: None,
        color: None,
        user_id: TEST_USER.to_string(),
    }
}

/// Creates a board whose columns hold the listed task titles in order.
pub async fn seed_board(store: &SqliteBoardStore, columns: &[(&str, Vec<&str>)]) -> BoardWithColumns {
    let titles: Vec<String> = columns.iter().map(|(t, _)| t.to_string()).collect();
    let mut created = store
        .create_board_with_default_columns(new_board("Seeded"), &titles)
        .await
        .unwrap();

    for (column, (_, tasks)) in created.columns.iter_mut().zip(columns) {
        for (order, title) in tasks.iter().enumerate() {
            let task = store
                .create_task(NewTask::new(column.column.id, *title, order as i32))
                .await
                .unwrap();
            column.tasks.push(task);
        }
    }

    created
}

pub fn titles(board: &BoardWithColumns, column_index: usize) -> Vec<String> {
    board.columns[column_index]
        .tasks
        .iter()
        .map(|t| t.title.clone())
        .collect()
}

pub fn task_named<'a>(board: &'a BoardWithColumns, title: &str) -> &'a Task {
    board
        .columns
        .iter()
        .flat_map(|c| c.tasks.iter())
        .find(|t| t.title == title)
        .unwrap()
}

pub fn orders(board: &BoardWithColumns, column_index: usize) -> Vec<i32> {
    board.columns[column_index]
        .tasks
        .iter()
        .map(|t| t.sort_order)
        .collect()
}

pub fn unknown_id() -> Uuid {
    Uuid::new_v4()
}
