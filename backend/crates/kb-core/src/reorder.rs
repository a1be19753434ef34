//! Task reordering and moving over an in-memory board.
//!
//! These are pure functions of (columns, intent) -> columns. They never touch
//! a store, so the board state manager can apply them optimistically and the
//! drag preview can reuse them.

use crate::{ColumnWithTasks, CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Final placement of a moved task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub column_id: Uuid,
    pub index: usize,
    /// False when the task already sat at this placement and nothing changed
    pub changed: bool,
}

impl Placement {
    pub fn sort_order(&self) -> i32 {
        i32::try_from(self.index).unwrap_or(i32::MAX)
    }
}

/// Locate a task. Returns `(column_index, task_index)`.
pub fn find_task(columns: &[ColumnWithTasks], task_id: Uuid) -> Option<(usize, usize)> {
    columns
        .iter()
        .enumerate()
        .find_map(|(ci, col)| col.task_index(task_id).map(|ti| (ci, ti)))
}

pub fn find_column(columns: &[ColumnWithTasks], column_id: Uuid) -> Option<usize> {
    columns.iter().position(|c| c.column.id == column_id)
}

/// Rewrite `sort_order` of every task in the column to its rank.
pub fn renumber(column: &mut ColumnWithTasks) {
    for (index, task) in column.tasks.iter_mut().enumerate() {
        task.sort_order = i32::try_from(index).unwrap_or(i32::MAX);
    }
}

/// Move a task to `new_index` inside `column_id`.
///
/// `new_index` is clamped to the last valid index. Returns false and leaves
/// the columns untouched if the task is not in that column or already sits at
/// that index.
pub fn reorder_within_column(
    columns: &mut [ColumnWithTasks],
    task_id: Uuid,
    column_id: Uuid,
    new_index: usize,
) -> bool {
    let Some(ci) = find_column(columns, column_id) else {
        return false;
    };
    let column = &mut columns[ci];
    let Some(current) = column.task_index(task_id) else {
        return false;
    };

    let target = new_index.min(column.tasks.len() - 1);
    if target == current {
        return false;
    }

    let task = column.tasks.remove(current);
    column.tasks.insert(target, task);
    renumber(column);
    true
}

/// Move a task into `target_column_id` at `target_index`.
///
/// The task is removed from whichever column holds it, then inserted at
/// `target_index` clamped to `[0, len]` where `len` is the target length after
/// removal. Source and target columns are renumbered densely.
#[track_caller]
pub fn move_task(
    columns: &mut [ColumnWithTasks],
    task_id: Uuid,
    target_column_id: Uuid,
    target_index: usize,
) -> CoreResult<Placement> {
    let (source_ci, source_ti) =
        find_task(columns, task_id).ok_or_else(|| CoreError::TaskNotFound {
            task_id,
            location: ErrorLocation::from(Location::caller()),
        })?;
    let target_ci =
        find_column(columns, target_column_id).ok_or_else(|| CoreError::ColumnNotFound {
            column_id: target_column_id,
            location: ErrorLocation::from(Location::caller()),
        })?;

    let len_after_removal = if source_ci == target_ci {
        columns[target_ci].tasks.len() - 1
    } else {
        columns[target_ci].tasks.len()
    };
    let index = target_index.min(len_after_removal);

    if source_ci == target_ci && index == source_ti {
        return Ok(Placement {
            column_id: target_column_id,
            index,
            changed: false,
        });
    }

    let mut task = columns[source_ci].tasks.remove(source_ti);
    task.column_id = target_column_id;
    columns[target_ci].tasks.insert(index, task);

    renumber(&mut columns[source_ci]);
    if source_ci != target_ci {
        renumber(&mut columns[target_ci]);
    }

    Ok(Placement {
        column_id: target_column_id,
        index,
        changed: true,
    })
}

/// Sort columns and their tasks by `sort_order`.
pub fn sort_columns(columns: &mut [ColumnWithTasks]) {
    columns.sort_by_key(|c| c.column.sort_order);
    for column in columns.iter_mut() {
        column.tasks.sort_by_key(|t| t.sort_order);
    }
}
