use kb_core::Priority;

use chrono::NaiveDate;
use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Create a task at the bottom of a column
    Create {
        /// Board ID (UUID)
        #[arg(long)]
        board_id: Uuid,

        /// Column ID (UUID)
        #[arg(long)]
        column_id: Uuid,

        /// Task title
        #[arg(long)]
        title: String,

        /// Task description
        #[arg(long)]
        description: Option<String>,

        /// Assignee
        #[arg(long)]
        assignee: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<NaiveDate>,

        /// Priority: low, medium, high (default: medium)
        #[arg(long, default_value_t = Priority::Medium)]
        priority: Priority,
    },

    /// Move a task to a column and position
    Move {
        /// Task ID (UUID)
        id: Uuid,

        /// Board ID (UUID)
        #[arg(long)]
        board_id: Uuid,

        /// Target column ID (UUID)
        #[arg(long)]
        column_id: Uuid,

        /// Zero-based position in the target column (clamped to the end)
        #[arg(long, default_value_t = 0)]
        index: usize,
    },
}
