use std::time::Duration;

use serde::Serialize;

use super::EngineConfig;

/// Game statistics tracking score, level, lines cleared, and piece count.
///
/// # Scoring
///
/// - Line clears: `cleared × line_clear_points × level`, using the level
///   before the clear is counted
/// - Hard drops: `hard_drop_points` per row descended
/// - No combo, back-to-back or T-spin bonuses
///
/// # Example
///
/// ```
/// use blockfall_engine::{EngineConfig, GameStats};
///
/// let config = EngineConfig::default();
/// let mut stats = GameStats::new();
/// stats.record_lock(4, &config);
///
/// assert_eq!(stats.score(), 400);
/// assert_eq!(stats.total_cleared_lines(), 4);
/// assert_eq!(stats.line_cleared_counter()[4], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameStats {
    score: usize,
    level: usize,
    completed_pieces: usize,
    total_cleared_lines: usize,
    line_cleared_counter: [usize; 5],
    hard_drop_points: usize,
    play_time_ms: u64,
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    /// Creates a new tracker at level 1 with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            completed_pieces: 0,
            total_cleared_lines: 0,
            line_cleared_counter: [0; 5],
            hard_drop_points: 0,
            play_time_ms: 0,
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Current level: `total_cleared_lines / lines_per_level + 1`.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    /// Returns the total number of pieces that have been locked into place.
    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Returns a histogram of locks by number of lines cleared.
    ///
    /// Index 0 counts locks that cleared nothing, index 4 counts tetrises.
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; 5] {
        &self.line_cleared_counter
    }

    /// Part of the score earned by hard drops.
    #[must_use]
    pub const fn hard_drop_points(&self) -> usize {
        self.hard_drop_points
    }

    /// Time spent in the running state.
    #[must_use]
    pub const fn play_time(&self) -> Duration {
        Duration::from_millis(self.play_time_ms)
    }

    pub(crate) const fn add_play_time(&mut self, elapsed_ms: u64) {
        self.play_time_ms = self.play_time_ms.saturating_add(elapsed_ms);
    }

    /// Updates statistics after a piece lock and returns the points awarded.
    pub fn record_lock(&mut self, cleared_lines: usize, config: &EngineConfig) -> usize {
        let points = cleared_lines
            .saturating_mul(config.line_clear_points)
            .saturating_mul(self.level);
        self.score = self.score.saturating_add(points);
        self.completed_pieces += 1;
        self.total_cleared_lines += cleared_lines;
        if let Some(counter) = self.line_cleared_counter.get_mut(cleared_lines) {
            *counter += 1;
        }
        self.level = self
            .total_cleared_lines
            .checked_div(config.lines_per_level)
            .unwrap_or(0)
            + 1;
        points
    }

    /// Awards hard-drop points for `rows` descended and returns them.
    pub fn record_hard_drop(&mut self, rows: usize, config: &EngineConfig) -> usize {
        let points = rows.saturating_mul(config.hard_drop_points);
        self.score = self.score.saturating_add(points);
        self.hard_drop_points = self.hard_drop_points.saturating_add(points);
        points
    }

    /// Drop interval for the current level.
    #[must_use]
    pub fn drop_interval_ms(&self, config: &EngineConfig) -> u64 {
        config.drop_interval_ms(self.level)
    }
}
