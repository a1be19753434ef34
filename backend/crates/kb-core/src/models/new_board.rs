use serde::{Deserialize, Serialize};

/// Input for creating a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBoard {
    pub title: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub user_id: String,
}
