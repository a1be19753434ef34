
use crate::Runner;

use kb_config::BoardConfig;
use kb_sync::{Identity, Session, SqliteBoardStore};

use std::sync::Arc;

pub const TEST_USER: &str = "cli_user";

pub async fn in_memory_runner() -> Runner {
    let pool = kb_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");
    let session = Session::new(
        Identity::new(TEST_USER),
        Arc::new(SqliteBoardStore::new(pool)),
    );
    Runner::new(session, BoardConfig::default())
}

/// Parse `kb <args>` into its command.
pub fn command(args: &[&str]) -> crate::commands::Commands {
    let mut argv = vec!["kb"];
    argv.extend_from_slice(args);
    <crate::Cli as clap::Parser>::try_parse_from(argv)
        .expect("arguments should parse")
        .command
}
