use anyhow::Context as _;
use blockfall_engine::GameEngine;

use crate::{
    command::play::app::PlayApp,
    logging::{self, LoggingArg},
    settings::{Settings, SettingsArg},
    tui::Runtime,
    util::Output,
    view,
};

mod app;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    #[clap(flatten)]
    settings: SettingsArg,
    #[clap(flatten)]
    logging: LoggingArg,
    /// Print the final game state as JSON instead of a one-line summary
    #[clap(long)]
    summary_json: bool,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        settings,
        logging,
        summary_json,
    } = arg;

    logging::init(logging)?;
    let settings = Settings::load(settings)?;
    let engine = match settings.seed {
        Some(seed) => GameEngine::with_seed(settings.engine.clone(), seed),
        None => GameEngine::with_config(settings.engine.clone()),
    }
    .context("Invalid engine configuration")?;

    let mut app = PlayApp::new(engine, &settings);
    Runtime::new()
        .run(&mut app)
        .context("Terminal I/O failed")?;

    let engine = app.into_engine();
    if *summary_json {
        Output::stdout().write_json(&engine.snapshot())?;
    } else {
        let stats = engine.stats();
        println!(
            "{} | score: {} | level: {} | lines: {} | pieces: {} | time: {}",
            engine.state(),
            stats.score(),
            stats.level(),
            stats.total_cleared_lines(),
            stats.completed_pieces(),
            view::format_play_time(stats.play_time()),
        );
    }
    Ok(())
}
