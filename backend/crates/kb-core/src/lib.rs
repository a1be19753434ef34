pub mod error;
pub mod models;
pub mod reorder;

#[cfg(test)]
mod tests;

pub use error::{CoreError, CoreResult, Result};
pub use error_location::ErrorLocation;
pub use models::board::Board;
pub use models::board_patch::BoardPatch;
pub use models::board_with_columns::BoardWithColumns;
pub use models::column::Column;
pub use models::column_with_tasks::ColumnWithTasks;
pub use models::new_board::NewBoard;
pub use models::new_task::NewTask;
pub use models::priority::Priority;
pub use models::task::Task;
pub use reorder::Placement;

use chrono::{DateTime, SubsecRound, Utc};

/// Color tag assigned to boards created without one.
pub const DEFAULT_BOARD_COLOR: &str = "bg-blue-500";

/// Current time truncated to the millisecond precision the store keeps.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
