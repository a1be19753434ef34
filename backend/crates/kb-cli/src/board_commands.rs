use kb_core::Priority;

use chrono::NaiveDate;
use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand, Debug)]
pub enum BoardCommands {
    /// List your boards, newest first
    List,

    /// Create a board with the configured default columns
    Create {
        /// Board title
        #[arg(long)]
        title: String,

        /// Board description
        #[arg(long)]
        description: Option<String>,

        /// Color tag (default: bg-blue-500)
        #[arg(long)]
        color: Option<String>,
    },

    /// Show a board with its columns and tasks
    Show {
        /// Board ID (UUID)
        id: Uuid,

        /// Only tasks with this priority: low, medium, high (repeatable)
        #[arg(long = "priority")]
        priorities: Vec<Priority>,

        /// Only tasks due on or before this date (YYYY-MM-DD)
        #[arg(long)]
        due_before: Option<NaiveDate>,
    },

    /// Update a board's title, color, or description
    Update {
        /// Board ID (UUID)
        id: Uuid,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New color tag
        #[arg(long)]
        color: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Dashboard counters over your boards
    Stats,
}
