use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Terminal result recorded for a finished game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordedOutcome {
    Win,
    Lose,
}

impl RecordedOutcome {
    pub const fn from_won(won: bool) -> Self {
        if won { Self::Win } else { Self::Lose }
    }
}

/// End-of-game document handed to the persistence backend once a game
/// reaches a terminal outcome. The engine only makes these fields
/// queryable; the backend owns the write, including retries and failures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub board_size: u8,
    pub goal: u32,
    pub ended_at: DateTime<Utc>,
    pub max_tile: u32,
    pub move_count: u32,
    pub outcome: RecordedOutcome,
}
