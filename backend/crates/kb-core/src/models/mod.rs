pub mod board;
pub mod board_patch;
pub mod board_with_columns;
pub mod column;
pub mod column_with_tasks;
pub mod new_board;
pub mod new_task;
pub mod priority;
pub mod task;
