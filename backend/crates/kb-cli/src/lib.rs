//! kb-cli library
//!
//! Argument definitions and the command runner, exported for the `kb` binary
//! and its tests.

pub mod board_commands;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod runner;
pub mod task_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use error::{CliError, Result};
pub use runner::{Runner, open_session};
