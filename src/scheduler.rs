//! Gravity scheduling
//!
//! The engine has no clock of its own. The host calls `tick` from its frame
//! loop with the elapsed time since the previous call; the scheduler
//! accumulates it and triggers one automatic descent whenever the current
//! drop interval is exceeded. Tests drive it with synthetic elapsed times.

use crate::config::EngineConfig;
use crate::game::{Game, GameState};
use std::time::Duration;

/// Elapsed-time accumulator plus the soft-drop toggle
#[derive(Debug, Clone)]
pub struct Scheduler {
    accumulator: Duration,
    soft_drop: bool,
    soft_drop_interval: Duration,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl Scheduler {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            accumulator: Duration::ZERO,
            soft_drop: false,
            soft_drop_interval: Duration::from_millis(config.soft_drop_interval_ms),
        }
    }

    /// Set or clear the soft-drop toggle. Wired to press/release input
    /// signals by the host; the flag is read once per tick.
    pub fn set_soft_drop(&mut self, held: bool) {
        self.soft_drop = held;
    }

    pub fn soft_drop(&self) -> bool {
        self.soft_drop
    }

    /// Advance time and fire at most one descent.
    ///
    /// The active interval is the session's level-derived one, or the fixed
    /// soft-drop interval while the toggle is held. Firing resets the
    /// accumulator to zero. Returns true if a descent fired.
    pub fn tick(&mut self, game: &mut Game, elapsed: Duration) -> bool {
        if game.state != GameState::Playing {
            return false;
        }

        self.accumulator += elapsed;
        let interval = if self.soft_drop {
            self.soft_drop_interval
        } else {
            game.drop_interval()
        };

        if self.accumulator > interval {
            game.step();
            self.accumulator = Duration::ZERO;
            return true;
        }
        false
    }
}
