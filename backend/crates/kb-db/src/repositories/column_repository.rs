use crate::error::Result as DbErrorResult;
use crate::row;

use kb_core::Column;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct ColumnRepository;

impl ColumnRepository {
    pub async fn create<'e, E>(executor: E, column: &Column) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO kb_columns (id, board_id, title, sort_order, created_at)
                VALUES (?, ?, ?, ?, ?)
                "#,
        )
        .bind(column.id.to_string())
        .bind(column.board_id.to_string())
        .bind(&column.title)
        .bind(column.sort_order)
        .bind(column.created_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Column>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, board_id, title, sort_order, created_at
                FROM kb_columns
                WHERE id = ?
                "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(column_from_row).transpose()
    }

    /// Columns of a board ordered by position.
    pub async fn find_by_board<'e, E>(executor: E, board_id: Uuid) -> DbErrorResult<Vec<Column>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, board_id, title, sort_order, created_at
                FROM kb_columns
                WHERE board_id = ?
                ORDER BY sort_order ASC
                "#,
        )
        .bind(board_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter().map(column_from_row).collect()
    }
}

fn column_from_row(r: &SqliteRow) -> DbErrorResult<Column> {
    Ok(Column {
        id: row::uuid(r, "column", "id")?,
        board_id: row::uuid(r, "column", "board_id")?,
        title: r.try_get("title")?,
        sort_order: r.try_get("sort_order")?,
        created_at: row::timestamp(r, "column", "created_at")?,
    })
}
