mod models;

use crate::{Column, ColumnWithTasks, NewTask, Task};

use uuid::Uuid;

/// Build a column titled `title` holding tasks with the given titles.
pub(crate) fn column_with(
    board_id: Uuid,
    title: &str,
    sort_order: i32,
    tasks: &[&str],
) -> ColumnWithTasks {
    let column = Column::new(board_id, title.to_string(), sort_order);
    let tasks = tasks
        .iter()
        .enumerate()
        .map(|(i, t)| Task::from_new(NewTask::new(column.id, *t, i as i32)))
        .collect();
    ColumnWithTasks::new(column, tasks)
}

pub(crate) fn titles(column: &ColumnWithTasks) -> Vec<&str> {
    column.tasks.iter().map(|t| t.title.as_str()).collect()
}

pub(crate) fn task_id(columns: &[ColumnWithTasks], title: &str) -> Uuid {
    columns
        .iter()
        .flat_map(|c| c.tasks.iter())
        .find(|t| t.title == title)
        .map(|t| t.id)
        .unwrap()
}
