use serde::{Deserialize, Serialize};

const HINT_COST: u32 = 5;
const WIN_POINTS_PER_LEVEL: u32 = 10;

/// Aggregate progression, persisted write-through after every mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub level: u32,
    pub score: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub total_rounds: u32,
    pub successful_rounds: u32,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self {
            level: 1,
            score: 0,
            streak: 0,
            best_streak: 0,
            total_rounds: 0,
            successful_rounds: 0,
        }
    }
}

impl SessionStats {
    /// Apply a won round: score at the pre-win level, then advance
    pub(crate) fn record_win(&mut self) {
        self.score += WIN_POINTS_PER_LEVEL * self.level;
        self.streak += 1;
        self.level += 1;
        self.total_rounds += 1;
        self.successful_rounds += 1;
        self.best_streak = self.best_streak.max(self.streak);
    }

    /// Apply a failed manual check: the streak resets
    pub(crate) fn record_miss(&mut self) {
        self.streak = 0;
        self.total_rounds += 1;
    }

    /// Deduct the hint cost, floored at zero; streak and level untouched
    pub(crate) fn charge_hint(&mut self) {
        self.score = self.score.saturating_sub(HINT_COST);
    }
}
