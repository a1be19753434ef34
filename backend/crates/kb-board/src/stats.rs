use kb_core::Board;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

pub const DEFAULT_RECENT_ACTIVITY_DAYS: u32 = 7;

/// Dashboard counters over a user's boards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BoardStats {
    pub total_boards: usize,
    /// Every board counts as an active project
    pub active_projects: usize,
    /// Boards updated within the activity window
    pub recent_activity: usize,
}

impl BoardStats {
    pub fn compute(boards: &[Board], now: DateTime<Utc>) -> Self {
        Self::compute_with_window(boards, now, DEFAULT_RECENT_ACTIVITY_DAYS)
    }

    pub fn compute_with_window(boards: &[Board], now: DateTime<Utc>, days: u32) -> Self {
        let since = now - Duration::days(i64::from(days));
        Self {
            total_boards: boards.len(),
            active_projects: boards.len(),
            recent_activity: boards.iter().filter(|b| b.updated_since(since)).count(),
        }
    }
}
