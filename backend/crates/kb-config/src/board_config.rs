use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_COLUMNS, DEFAULT_RECENT_ACTIVITY_DAYS,
    MAX_COLUMN_TITLE_LENGTH,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Columns every new board starts with, left to right
    pub default_columns: Vec<String>,
    /// Window for the dashboard's "recent activity" count
    pub recent_activity_days: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_columns: DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            recent_activity_days: DEFAULT_RECENT_ACTIVITY_DAYS,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.default_columns.is_empty() {
            return Err(ConfigError::board("board.default_columns cannot be empty"));
        }

        for title in &self.default_columns {
            if title.trim().is_empty() {
                return Err(ConfigError::board(
                    "board.default_columns cannot contain blank titles",
                ));
            }
            if title.len() > MAX_COLUMN_TITLE_LENGTH {
                return Err(ConfigError::board(format!(
                    "board.default_columns entry exceeds {} characters",
                    MAX_COLUMN_TITLE_LENGTH
                )));
            }
        }

        if self.recent_activity_days == 0 {
            return Err(ConfigError::board(
                "board.recent_activity_days must be at least 1",
            ));
        }

        Ok(())
    }
}
