use std::{fs::File, path::PathBuf, sync::Mutex};

use anyhow::Context as _;
use tracing::Level;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct LoggingArg {
    /// Write logs to this file (the terminal belongs to the game, so logs are off without it)
    #[clap(long)]
    log_file: Option<PathBuf>,
    /// Maximum level written to the log file
    #[clap(long, default_value_t = Level::INFO)]
    log_level: Level,
}

impl Default for LoggingArg {
    fn default() -> Self {
        Self {
            log_file: None,
            log_level: Level::INFO,
        }
    }
}

/// Installs the global `tracing` subscriber when a log file is requested.
pub(crate) fn init(arg: &LoggingArg) -> anyhow::Result<()> {
    let LoggingArg {
        log_file,
        log_level,
    } = arg;
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(*log_level)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("Failed to install log subscriber")?;

    tracing::info!(path = %path.display(), level = %log_level, "logging initialized");
    Ok(())
}
