//! The user's boards as shown on the dashboard.

use crate::{BoardError, BoardStats, NewBoardInput, Result};

use kb_core::{Board, BoardWithColumns};
use kb_sync::Session;

use chrono::{DateTime, Utc};
use log::{info, warn};

#[derive(Debug, Default)]
pub struct BoardListManager {
    session: Option<Session>,
    default_columns: Vec<String>,
    boards: Vec<Board>,
    loading: bool,
    error: Option<BoardError>,
}

impl BoardListManager {
    /// `default_columns` are the titles given to the columns of every board
    /// created through this manager.
    pub fn new(default_columns: Vec<String>) -> Self {
        Self {
            default_columns,
            ..Self::default()
        }
    }

    /// Attach the session for a newly known identity. Switching to a
    /// different user drops the listed boards.
    pub fn set_session(&mut self, session: Session) {
        let same_user = self
            .session
            .as_ref()
            .is_some_and(|current| current.identity() == session.identity());
        if !same_user {
            self.reset();
        }
        self.session = Some(session);
    }

    pub fn clear_session(&mut self) {
        self.session = None;
        self.reset();
    }

    fn reset(&mut self) {
        self.boards.clear();
        self.error = None;
        self.loading = false;
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&BoardError> {
        self.error.as_ref()
    }

    /// Fetch the user's boards, newest first.
    pub async fn load(&mut self) -> Result<()> {
        let session = self
            .session
            .clone()
            .ok_or_else(BoardError::not_signed_in)?;

        self.loading = true;
        let fetched = session.store().list_boards(session.user_id()).await;
        self.loading = false;

        match fetched {
            Ok(boards) => {
                info!("Loaded {} boards for {}", boards.len(), session.identity());
                self.boards = boards;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to list boards for {}: {}", session.identity(), e);
                let message = e.to_string();
                self.error = Some(BoardError::load_list(message.clone()));
                Err(BoardError::load_list(message))
            }
        }
    }

    /// Create a board with the default columns and put it at the front.
    pub async fn create_board(&mut self, input: NewBoardInput) -> Result<BoardWithColumns> {
        let session = self
            .session
            .clone()
            .ok_or_else(BoardError::not_signed_in)?;

        if input.title.trim().is_empty() {
            return Err(BoardError::validation("board title cannot be empty"));
        }

        let created = session
            .store()
            .create_board_with_default_columns(
                input.into_new_board(session.user_id()),
                &self.default_columns,
            )
            .await
            .map_err(BoardError::from_store_write)?;

        info!(
            "Created board {} with {} columns",
            created.board.id,
            created.columns.len()
        );
        self.boards.insert(0, created.board.clone());

        Ok(created)
    }

    pub fn stats(&self, now: DateTime<Utc>) -> BoardStats {
        BoardStats::compute(&self.boards, now)
    }
}
