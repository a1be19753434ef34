use crate::error::Result as DbErrorResult;
use crate::row;

use kb_core::Board;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct BoardRepository;

impl BoardRepository {
    pub async fn create<'e, E>(executor: E, board: &Board) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO kb_boards (
                    id, title, description, color, user_id, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
        )
        .bind(board.id.to_string())
        .bind(&board.title)
        .bind(&board.description)
        .bind(&board.color)
        .bind(&board.user_id)
        .bind(board.created_at.timestamp_millis())
        .bind(board.updated_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Find a board owned by `user_id`. Boards of other users are invisible.
    pub async fn find_for_user<'e, E>(
        executor: E,
        id: Uuid,
        user_id: &str,
    ) -> DbErrorResult<Option<Board>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, title, description, color, user_id, created_at, updated_at
                FROM kb_boards
                WHERE id = ? AND user_id = ?
                "#,
        )
        .bind(id.to_string())
        .bind(user_id)
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(board_from_row).transpose()
    }

    /// All boards of a user, newest first.
    pub async fn find_by_user<'e, E>(executor: E, user_id: &str) -> DbErrorResult<Vec<Board>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, title, description, color, user_id, created_at, updated_at
                FROM kb_boards
                WHERE user_id = ?
                ORDER BY created_at DESC
                "#,
        )
        .bind(user_id)
        .fetch_all(executor)
        .await?;

        rows.iter().map(board_from_row).collect()
    }

    pub async fn update<'e, E>(executor: E, board: &Board) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                UPDATE kb_boards
                SET title = ?, description = ?, color = ?, updated_at = ?
                WHERE id = ? AND user_id = ?
                "#,
        )
        .bind(&board.title)
        .bind(&board.description)
        .bind(&board.color)
        .bind(board.updated_at.timestamp_millis())
        .bind(board.id.to_string())
        .bind(&board.user_id)
        .execute(executor)
        .await?;

        Ok(())
    }
}

fn board_from_row(r: &SqliteRow) -> DbErrorResult<Board> {
    Ok(Board {
        id: row::uuid(r, "board", "id")?,
        title: r.try_get("title")?,
        description: r.try_get("description")?,
        color: r.try_get("color")?,
        user_id: r.try_get("user_id")?,
        created_at: row::timestamp(r, "board", "created_at")?,
        updated_at: row::timestamp(r, "board", "updated_at")?,
    })
}
