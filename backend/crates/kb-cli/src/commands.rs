use crate::{board_commands::BoardCommands, task_commands::TaskCommands};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Board operations
    Board {
        #[command(subcommand)]
        action: BoardCommands,
    },

    /// Task operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
}
