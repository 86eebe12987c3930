//! Scoring, line counting and level progression
//!
//! Rows cleared by a single lock chain: the k-th row of the sweep is worth
//! base * 2^(k-1), so a triple pays 10 + 20 + 40 rather than 30.

use crate::config::EngineConfig;
use std::time::Duration;

/// Outcome of applying one sweep's clears
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearOutcome {
    pub points: u64,
    pub levels_gained: u32,
}

/// Score, lines and level for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    /// Current score
    pub points: u64,
    /// Total lines cleared
    pub lines: u32,
    /// Current level, starts at 0
    pub level: u32,
    /// Level-derived interval between automatic descents
    drop_interval: Duration,
}

impl Score {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            points: 0,
            lines: 0,
            level: 0,
            drop_interval: Duration::from_millis(config.interval_for_level(0)),
        }
    }

    /// Apply the rows cleared by one sweep.
    ///
    /// Lines are counted row by row, matching the sweep scan: the chained
    /// bonus doubles per row, and the level check runs after each single
    /// increment so every multiple of `lines_per_level` is caught even when
    /// one sweep crosses it mid-way.
    pub fn apply_clear(&mut self, rows_cleared: usize, config: &EngineConfig) -> ClearOutcome {
        let mut row_value = config.base_line_score;
        let mut outcome = ClearOutcome {
            points: 0,
            levels_gained: 0,
        };

        for _ in 0..rows_cleared {
            self.lines += 1;
            outcome.points += row_value;
            row_value *= 2;

            if self.lines % config.lines_per_level == 0 {
                self.level += 1;
                outcome.levels_gained += 1;
                self.drop_interval = Duration::from_millis(config.interval_for_level(self.level));
            }
        }

        self.points += outcome.points;
        outcome
    }

    /// The current normal (not soft-drop) interval between descents
    pub fn drop_interval(&self) -> Duration {
        self.drop_interval
    }
}
