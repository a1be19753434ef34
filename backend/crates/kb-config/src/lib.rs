mod auth_config;
mod board_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use board_config::BoardConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_DIR_ENV: &str = "KB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".kanban";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "kanban.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_DATABASE_BUSY_TIMEOUT_SECS: u64 = 5;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_COLUMNS: [&str; 4] = ["To Do", "In Progress", "Review", "Done"];
const DEFAULT_RECENT_ACTIVITY_DAYS: u32 = 7;
const MAX_COLUMN_TITLE_LENGTH: usize = 100;
