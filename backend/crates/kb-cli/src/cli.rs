use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "kb")]
#[command(about = "Kanban board CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// User ID to act as (overrides KB_AUTH_USER_ID and [auth] user_id)
    #[arg(long, global = true)]
    pub user_id: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
