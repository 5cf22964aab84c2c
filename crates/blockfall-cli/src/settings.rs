use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;
use blockfall_engine::{EngineConfig, PieceSeed};
use serde::{Deserialize, Serialize};

use crate::util;

/// Everything the CLI needs to set up a game.
///
/// Layered as: built-in defaults, then the `--config` JSON file, then flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub engine: EngineConfig,
    /// Interval between engine ticks.
    pub tick_ms: u64,
    pub show_ghost: bool,
    /// Fixed piece seed; random when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<PieceSeed>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            tick_ms: 16,
            show_ghost: true,
            seed: None,
        }
    }
}

impl Settings {
    pub fn load(arg: &SettingsArg) -> anyhow::Result<Self> {
        let mut settings = match &arg.config {
            Some(path) => util::read_json_file("settings", path)?,
            None => Settings::default(),
        };
        arg.apply(&mut settings);
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.engine
            .validate()
            .context("Invalid engine configuration")?;
        anyhow::ensure!(self.tick_ms > 0, "tick_ms must be greater than zero");
        Ok(())
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SettingsArg {
    /// Settings file (JSON); missing fields keep their defaults
    #[clap(long)]
    config: Option<PathBuf>,
    /// Interval between engine ticks in milliseconds
    #[clap(long)]
    tick_ms: Option<u64>,
    /// Piece seed as 32 hex digits, for a reproducible piece sequence
    #[clap(long)]
    seed: Option<PieceSeed>,
    /// Hide the landing preview
    #[clap(long)]
    no_ghost: bool,
}

impl SettingsArg {
    fn apply(&self, settings: &mut Settings) {
        let Self {
            config: _,
            tick_ms,
            seed,
            no_ghost,
        } = self;
        if let Some(tick_ms) = tick_ms {
            settings.tick_ms = *tick_ms;
        }
        if let Some(seed) = seed {
            settings.seed = Some(*seed);
        }
        if *no_ghost {
            settings.show_ghost = false;
        }
    }
}
