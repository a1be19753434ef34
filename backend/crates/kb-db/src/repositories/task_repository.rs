use crate::error::Result as DbErrorResult;
use crate::{DbError, row};

use kb_core::{Priority, Task};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct TaskRepository;

impl TaskRepository {
    pub async fn create<'e, E>(executor: E, task: &Task) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO kb_tasks (
                    id, column_id, title, description, assignee, due_date,
                    priority, sort_order, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
        )
        .bind(task.id.to_string())
        .bind(task.column_id.to_string())
        .bind(&task.title)
        .bind(&task.description)
        .bind(&task.assignee)
        .bind(row::format_date(task.due_date))
        .bind(task.priority.as_str())
        .bind(task.sort_order)
        .bind(task.created_at.timestamp_millis())
        .bind(task.updated_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, column_id, title, description, assignee, due_date,
                       priority, sort_order, created_at, updated_at
                FROM kb_tasks
                WHERE id = ?
                "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(task_from_row).transpose()
    }

    /// All tasks of a board, grouped by column position then task position.
    pub async fn find_by_board<'e, E>(executor: E, board_id: Uuid) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT t.id, t.column_id, t.title, t.description, t.assignee, t.due_date,
                       t.priority, t.sort_order, t.created_at, t.updated_at
                FROM kb_tasks t
                INNER JOIN kb_columns c ON c.id = t.column_id
                WHERE c.board_id = ?
                ORDER BY c.sort_order ASC, t.sort_order ASC, t.created_at ASC
                "#,
        )
        .bind(board_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter().map(task_from_row).collect()
    }

    /// Number of tasks in a column, optionally ignoring one task.
    pub async fn count_in_column<'e, E>(
        executor: E,
        column_id: Uuid,
        excluding: Option<Uuid>,
    ) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar(
            r#"
                SELECT COUNT(*)
                FROM kb_tasks
                WHERE column_id = ? AND id IS NOT ?
                "#,
        )
        .bind(column_id.to_string())
        .bind(excluding.map(|id| id.to_string()))
        .fetch_one(executor)
        .await?;

        Ok(count)
    }

    /// Shift every task at or after `from` one slot down the column, leaving
    /// room at `from`. `excluding` is never shifted.
    pub async fn open_slot<'e, E>(
        executor: E,
        column_id: Uuid,
        from: i32,
        excluding: Uuid,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                UPDATE kb_tasks
                SET sort_order = sort_order + 1
                WHERE column_id = ? AND sort_order >= ? AND id != ?
                "#,
        )
        .bind(column_id.to_string())
        .bind(from)
        .bind(excluding.to_string())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Shift every task after `vacated` one slot up the column, closing the
    /// gap a removed task left behind.
    pub async fn close_gap<'e, E>(
        executor: E,
        column_id: Uuid,
        vacated: i32,
        excluding: Uuid,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                UPDATE kb_tasks
                SET sort_order = sort_order - 1
                WHERE column_id = ? AND sort_order > ? AND id != ?
                "#,
        )
        .bind(column_id.to_string())
        .bind(vacated)
        .bind(excluding.to_string())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Set a task's column and position together.
    pub async fn set_placement<'e, E>(
        executor: E,
        id: Uuid,
        column_id: Uuid,
        sort_order: i32,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE kb_tasks
                SET column_id = ?, sort_order = ?, updated_at = ?
                WHERE id = ?
                "#,
        )
        .bind(column_id.to_string())
        .bind(sort_order)
        .bind(updated_at.timestamp_millis())
        .bind(id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }
}

fn task_from_row(r: &SqliteRow) -> DbErrorResult<Task> {
    let priority: String = r.try_get("priority")?;

    Ok(Task {
        id: row::uuid(r, "task", "id")?,
        column_id: row::uuid(r, "task", "column_id")?,
        title: r.try_get("title")?,
        description: r.try_get("description")?,
        assignee: r.try_get("assignee")?,
        due_date: row::date(r, "task", "due_date")?,
        priority: Priority::from_str(&priority).map_err(|e| {
            DbError::corrupt_row(format!("Invalid Priority in task.priority: {}", e))
        })?,
        sort_order: r.try_get("sort_order")?,
        created_at: row::timestamp(r, "task", "created_at")?,
        updated_at: row::timestamp(r, "task", "updated_at")?,
    })
}
