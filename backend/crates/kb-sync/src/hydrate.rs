//! Maps store records into the in-memory board shape.

use kb_core::{Board, BoardWithColumns, Column, ColumnWithTasks, Task, reorder};

use std::collections::HashMap;

use log::warn;
use uuid::Uuid;

/// Group tasks under their columns. Columns end up ordered by `sort_order`,
/// tasks within a column by `sort_order`. Tasks pointing at a column outside
/// `columns` are dropped.
pub fn assemble(board: Board, columns: Vec<Column>, tasks: Vec<Task>) -> BoardWithColumns {
    let mut by_column: HashMap<Uuid, Vec<Task>> = HashMap::new();
    for task in tasks {
        by_column.entry(task.column_id).or_default().push(task);
    }

    let mut columns: Vec<ColumnWithTasks> = columns
        .into_iter()
        .map(|column| {
            let tasks = by_column.remove(&column.id).unwrap_or_default();
            ColumnWithTasks::new(column, tasks)
        })
        .collect();

    for (column_id, orphans) in by_column {
        warn!(
            "Dropping {} task(s) of board {} that reference unknown column {}",
            orphans.len(),
            board.id,
            column_id
        );
    }

    reorder::sort_columns(&mut columns);

    BoardWithColumns { board, columns }
}
