//! Executes parsed commands against a store session.
//!
//! Each command drives the same managers a UI would: board commands go
//! through `BoardListManager` or a freshly loaded `BoardStateManager`, task
//! commands load the board first and then mutate through the manager.

use crate::board_commands::BoardCommands;
use crate::commands::Commands;
use crate::task_commands::TaskCommands;
use crate::{CliError, Result};

use kb_board::{
    BoardListManager, BoardStateManager, BoardStats, NewBoardInput, NewTaskInput, TaskFilter,
};
use kb_config::{BoardConfig, Config};
use kb_core::{BoardPatch, ColumnWithTasks};
use kb_db::PoolOptions;
use kb_sync::{Identity, Session, SqliteBoardStore, StoreProvider};

use std::sync::Arc;

use chrono::Utc;
use log::info;
use serde_json::{Value, json};
use uuid::Uuid;

/// Identity precedence: `--user-id` flag, then configuration (which already
/// folds in `KB_AUTH_USER_ID`).
#[track_caller]
pub fn resolve_identity(flag: Option<String>, config: &Config) -> Result<Identity> {
    flag.or_else(|| config.auth.user_id.clone())
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .map(Identity::new)
        .ok_or_else(CliError::missing_identity)
}

/// Open the configured database and establish the session for `identity`.
pub async fn open_session(
    config: &Config,
    identity: Identity,
    provider: &StoreProvider,
) -> Result<Session> {
    let db_path = config.database_path()?;
    let options = PoolOptions {
        max_connections: config.database.max_connections,
        busy_timeout: config.database.busy_timeout(),
    };
    let pool = kb_db::connect(&db_path, options).await?;

    Ok(provider
        .establish(identity, Arc::new(SqliteBoardStore::new(pool)))
        .await)
}

pub struct Runner {
    session: Session,
    board_config: BoardConfig,
}

impl Runner {
    pub fn new(session: Session, board_config: BoardConfig) -> Self {
        Self {
            session,
            board_config,
        }
    }

    pub async fn run(&self, command: Commands) -> Result<Value> {
        match command {
            Commands::Board { action } => self.run_board(action).await,
            Commands::Task { action } => self.run_task(action).await,
        }
    }

    // =========================================================================
    // Board Operations
    // =========================================================================

    async fn run_board(&self, action: BoardCommands) -> Result<Value> {
        match action {
            BoardCommands::List => {
                let mut list = self.board_list();
                list.load().await?;
                Ok(json!({ "boards": list.boards() }))
            }

            BoardCommands::Create {
                title,
                description,
                color,
            } => {
                let mut list = self.board_list();
                let created = list
                    .create_board(NewBoardInput {
                        title,
                        description,
                        color,
                    })
                    .await?;
                info!("Created board {}", created.board.id);
                Ok(serde_json::to_value(&created)?)
            }

            BoardCommands::Show {
                id,
                priorities,
                due_before,
            } => {
                let manager = self.load_board(id).await?;
                let filter = TaskFilter {
                    priorities,
                    due_on_or_before: due_before,
                };
                let columns: Vec<ColumnWithTasks> = manager
                    .columns()
                    .iter()
                    .map(|column| {
                        ColumnWithTasks::new(
                            column.column.clone(),
                            filter.apply(column).into_iter().cloned().collect(),
                        )
                    })
                    .collect();

                Ok(json!({
                    "board": manager.board(),
                    "columns": columns,
                    "total_tasks": manager.total_tasks(),
                }))
            }

            BoardCommands::Update {
                id,
                title,
                color,
                description,
            } => {
                let mut manager = self.load_board(id).await?;
                let board = manager
                    .update_board(BoardPatch {
                        title,
                        color,
                        description,
                    })
                    .await?;
                Ok(json!({ "board": board }))
            }

            BoardCommands::Stats => {
                let mut list = self.board_list();
                list.load().await?;
                let stats = BoardStats::compute_with_window(
                    list.boards(),
                    Utc::now(),
                    self.board_config.recent_activity_days,
                );
                Ok(serde_json::to_value(stats)?)
            }
        }
    }

    // =========================================================================
    // Task Operations
    // =========================================================================

    async fn run_task(&self, action: TaskCommands) -> Result<Value> {
        match action {
            TaskCommands::Create {
                board_id,
                column_id,
                title,
                description,
                assignee,
                due_date,
                priority,
            } => {
                let mut manager = self.load_board(board_id).await?;
                let task = manager
                    .create_task(
                        column_id,
                        NewTaskInput {
                            title,
                            description,
                            assignee,
                            due_date,
                            priority,
                        },
                    )
                    .await?;
                Ok(json!({ "task": task }))
            }

            TaskCommands::Move {
                id,
                board_id,
                column_id,
                index,
            } => {
                let mut manager = self.load_board(board_id).await?;
                let placement = manager.move_task(id, column_id, index).await?;
                Ok(json!({
                    "task_id": id,
                    "column_id": placement.column_id,
                    "index": placement.index,
                    "changed": placement.changed,
                    "columns": manager.columns(),
                }))
            }
        }
    }

    fn board_list(&self) -> BoardListManager {
        let mut list = BoardListManager::new(self.board_config.default_columns.clone());
        list.set_session(self.session.clone());
        list
    }

    async fn load_board(&self, board_id: Uuid) -> Result<BoardStateManager> {
        let mut manager = BoardStateManager::with_session(self.session.clone());
        manager.load(board_id).await?;
        Ok(manager)
    }
}
