use serde::Serialize;
use uuid::Uuid;

/// Whether committed state is known to match the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SyncStatus {
    #[default]
    Synced,
    /// A persist failed after the optimistic change was applied. Cleared by a
    /// successful load.
    Dirty { task_id: Uuid, message: String },
}

impl SyncStatus {
    pub fn is_dirty(&self) -> bool {
        matches!(self, Self::Dirty { .. })
    }
}
