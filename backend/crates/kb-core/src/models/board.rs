//! Board entity - top-level container for a set of columns.

use crate::{BoardPatch, DEFAULT_BOARD_COLOR, NewBoard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A board is owned by exactly one user and is never hard-deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Color tag shown next to the board title (e.g. "bg-blue-500")
    pub color: String,
    /// Owner identity as issued by the identity provider
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    pub fn new(new_board: NewBoard) -> Self {
        let now = crate::now();
        Self {
            id: Uuid::new_v4(),
            title: new_board.title,
            description: new_board.description,
            color: new_board
                .color
                .unwrap_or_else(|| DEFAULT_BOARD_COLOR.to_string()),
            user_id: new_board.user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. Returns true if any field changed.
    pub fn apply_patch(&mut self, patch: &BoardPatch) -> bool {
        let mut changed = false;

        if let Some(ref title) = patch.title
            && *title != self.title
        {
            self.title = title.clone();
            changed = true;
        }
        if let Some(ref color) = patch.color
            && *color != self.color
        {
            self.color = color.clone();
            changed = true;
        }
        if let Some(ref description) = patch.description
            && self.description.as_ref() != Some(description)
        {
            self.description = Some(description.clone());
            changed = true;
        }

        if changed {
            self.updated_at = crate::now();
        }
        changed
    }

    /// True if the board was updated at or after `since`.
    pub fn updated_since(&self, since: DateTime<Utc>) -> bool {
        self.updated_at >= since
    }
}
