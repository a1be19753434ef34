//! Client-side board state: optimistic task moves, drag gestures, the board
//! list and dashboard statistics.

pub mod board_list;
pub mod drag;
pub mod error;
pub mod filter;
pub mod input;
pub mod shared;
pub mod state;
pub mod stats;
pub mod sync_status;

#[cfg(test)]
mod tests;

pub use board_list::BoardListManager;
pub use drag::{DragController, DropTarget};
pub use error::{BoardError, Result};
pub use filter::TaskFilter;
pub use input::{NewBoardInput, NewTaskInput};
pub use shared::SharedBoard;
pub use state::BoardStateManager;
pub use stats::BoardStats;
pub use sync_status::SyncStatus;
