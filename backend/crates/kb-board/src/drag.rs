//! Translates pointer gestures into state manager calls.

use crate::{BoardStateManager, Result};

use kb_core::{ColumnWithTasks, Placement, reorder};

use log::debug;
use uuid::Uuid;

/// What the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Task(Uuid),
    Column(Uuid),
}

#[derive(Debug, Clone, Copy)]
struct Gesture {
    task_id: Uuid,
    origin_column_id: Uuid,
    origin_index: usize,
    hover: Option<DropTarget>,
}

/// Tracks at most one drag gesture at a time.
#[derive(Debug, Default)]
pub struct DragController {
    active: Option<Gesture>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn dragged_task(&self) -> Option<Uuid> {
        self.active.map(|g| g.task_id)
    }

    pub fn hover(&self) -> Option<DropTarget> {
        self.active.and_then(|g| g.hover)
    }

    /// Pick up a task. Returns false, and starts nothing, if the task is not on
    /// the board. Any preview left from an earlier gesture is replaced by a
    /// fresh copy of the committed columns.
    pub fn start(&mut self, manager: &mut BoardStateManager, task_id: Uuid) -> bool {
        let committed = manager.committed_columns();
        let Some((ci, ti)) = reorder::find_task(committed, task_id) else {
            debug!("Ignoring drag of unknown task {}", task_id);
            self.active = None;
            return false;
        };

        self.active = Some(Gesture {
            task_id,
            origin_column_id: committed[ci].column.id,
            origin_index: ti,
            hover: None,
        });
        manager.discard_preview();
        manager.begin_preview();
        true
    }

    /// Pointer moved over `target`. Hovering over another task in the dragged
    /// task's own column reorders the preview live.
    pub fn drag_over(&mut self, manager: &mut BoardStateManager, target: DropTarget) {
        let Some(gesture) = self.active.as_mut() else {
            return;
        };
        if resolve(manager.columns(), gesture.task_id, target).is_none() {
            return;
        }
        gesture.hover = Some(target);

        let DropTarget::Task(over_id) = target else {
            return;
        };
        let columns = manager.columns();
        let (Some((over_ci, over_ti)), Some((drag_ci, drag_ti))) = (
            reorder::find_task(columns, over_id),
            reorder::find_task(columns, gesture.task_id),
        ) else {
            return;
        };

        if over_ci == drag_ci && over_ti != drag_ti {
            let column_id = columns[drag_ci].column.id;
            manager.reorder_within_column(gesture.task_id, column_id, over_ti);
        }
    }

    /// Drop. `None` means the pointer left every valid target and cancels the
    /// gesture. An unknown target falls back to the last valid hover target.
    ///
    /// Returns the placement applied, or `None` when nothing was moved.
    pub async fn end(
        &mut self,
        manager: &mut BoardStateManager,
        target: Option<DropTarget>,
    ) -> Result<Option<Placement>> {
        let Some(gesture) = self.active.take() else {
            return Ok(None);
        };
        let Some(target) = target else {
            manager.discard_preview();
            return Ok(None);
        };

        let resolved = resolve(manager.columns(), gesture.task_id, target).or_else(|| {
            gesture
                .hover
                .and_then(|hover| resolve(manager.columns(), gesture.task_id, hover))
        });
        let Some((column_id, index)) = resolved else {
            manager.discard_preview();
            return Ok(None);
        };

        if column_id == gesture.origin_column_id && index == gesture.origin_index {
            debug!("Task {} dropped at its origin", gesture.task_id);
            manager.discard_preview();
            return Ok(None);
        }

        manager
            .move_task(gesture.task_id, column_id, index)
            .await
            .map(Some)
    }

    /// Abandon the gesture; committed state is shown again.
    pub fn cancel(&mut self, manager: &mut BoardStateManager) {
        self.active = None;
        manager.discard_preview();
    }
}

/// Final `(column_id, index)` for dropping `dragged` on `target`, read from
/// the columns currently displayed. Dropping on a task of another column
/// takes that task's rank; dropping on a column appends.
fn resolve(
    columns: &[ColumnWithTasks],
    dragged: Uuid,
    target: DropTarget,
) -> Option<(Uuid, usize)> {
    match target {
        DropTarget::Task(over_id) => {
            let (ci, ti) = reorder::find_task(columns, over_id)?;
            let column = &columns[ci];
            // Live reorders already put the dragged task at the hovered rank
            let index = column.task_index(dragged).unwrap_or(ti);
            Some((column.column.id, index))
        }
        DropTarget::Column(column_id) => {
            let ci = reorder::find_column(columns, column_id)?;
            let column = &columns[ci];
            // Appending in the dragged task's own column means the last slot
            let len = column.tasks.len();
            let index = if column.contains(dragged) {
                len.saturating_sub(1)
            } else {
                len
            };
            Some((column_id, index))
        }
    }
}
