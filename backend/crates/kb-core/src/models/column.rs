use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: Uuid,
    pub board_id: Uuid,
    pub title: String,
    /// Position among sibling columns, ascending left to right
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl Column {
    pub fn new(board_id: Uuid, title: String, sort_order: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            board_id,
            title,
            sort_order,
            created_at: crate::now(),
        }
    }
}
