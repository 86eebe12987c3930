//! Engine tunables
//!
//! Hosts construct or deserialize an `EngineConfig` and hand it to the
//! session; the engine itself never reads files.

use serde::{Deserialize, Serialize};

/// Timing and scoring tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Drop interval at level 0, in milliseconds
    pub start_interval_ms: u64,
    /// Floor for the drop interval as levels increase
    pub min_interval_ms: u64,
    /// How much faster each level makes the drop interval
    pub interval_step_ms: u64,
    /// Fixed interval while soft drop is held
    pub soft_drop_interval_ms: u64,
    /// Points for the first row of a clear; each additional row in the same
    /// sweep doubles the per-row value
    pub base_line_score: u64,
    /// Cumulative lines per level-up
    pub lines_per_level: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            start_interval_ms: 1000,
            min_interval_ms: 200,
            interval_step_ms: 50,
            soft_drop_interval_ms: 50,
            base_line_score: 10,
            lines_per_level: 10,
        }
    }
}

impl EngineConfig {
    /// The normal drop interval for a level: start minus step per level,
    /// never below the floor
    pub fn interval_for_level(&self, level: u32) -> u64 {
        self.start_interval_ms
            .saturating_sub(self.interval_step_ms * level as u64)
            .max(self.min_interval_ms)
    }
}
