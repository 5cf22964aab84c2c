use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Timing and scoring rules of a game.
///
/// Every field has a default, so a partial JSON document is a valid config:
///
/// ```
/// use blockfall_engine::EngineConfig;
///
/// let config: EngineConfig = serde_json::from_str(r#"{ "lines_per_level": 5 }"#).unwrap();
/// assert_eq!(config.lines_per_level, 5);
/// assert_eq!(config.initial_drop_interval_ms, 1000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Drop interval at level 1.
    pub initial_drop_interval_ms: u64,
    /// Lower bound of the drop interval.
    pub min_drop_interval_ms: u64,
    /// Drop interval reduction per level.
    pub drop_interval_step_ms: u64,
    /// Lines needed to advance one level.
    pub lines_per_level: usize,
    /// Points per cleared line, multiplied by the level.
    pub line_clear_points: usize,
    /// Points per row descended by a hard drop.
    pub hard_drop_points: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_drop_interval_ms: 1000,
            min_drop_interval_ms: 100,
            drop_interval_step_ms: 100,
            lines_per_level: 10,
            line_clear_points: 100,
            hard_drop_points: 2,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lines_per_level == 0 {
            return Err(ConfigError::ZeroLinesPerLevel);
        }
        if self.min_drop_interval_ms == 0 {
            return Err(ConfigError::ZeroMinDropInterval);
        }
        if self.min_drop_interval_ms > self.initial_drop_interval_ms {
            return Err(ConfigError::MinAboveInitial {
                min: self.min_drop_interval_ms,
                initial: self.initial_drop_interval_ms,
            });
        }
        Ok(())
    }

    /// Drop interval at `level` (1-based):
    /// `max(min, initial - (level - 1) * step)`.
    #[must_use]
    pub fn drop_interval_ms(&self, level: usize) -> u64 {
        let steps = u64::try_from(level.saturating_sub(1)).unwrap_or(u64::MAX);
        self.initial_drop_interval_ms
            .saturating_sub(steps.saturating_mul(self.drop_interval_step_ms))
            .max(self.min_drop_interval_ms)
    }
}
