//! kb - Kanban board CLI
//!
//! # Examples
//!
//! ```bash
//! # Create a board with the default columns
//! kb --user-id alice board create --title "Launch" --pretty
//!
//! # Move a task to the top of another column
//! kb --user-id alice task move <task-id> --board-id <board-id> --column-id <column-id> --index 0
//! ```

use kb_cli::{Cli, CliError, Runner, logger, open_session, runner::resolve_identity};
use kb_config::Config;
use kb_sync::StoreProvider;

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<Value, CliError> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let identity = resolve_identity(cli.user_id, &config)?;

    let provider = StoreProvider::new();
    let session = open_session(&config, identity, &provider).await?;

    let result = Runner::new(session, config.board.clone())
        .run(cli.command)
        .await;

    provider.teardown().await;

    result
}
