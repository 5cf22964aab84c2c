use std::path::PathBuf;

use crate::{
    settings::{Settings, SettingsArg},
    util::Output,
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PrintConfigArg {
    #[clap(flatten)]
    settings: SettingsArg,
    /// Output file path (stdout when omitted)
    #[clap(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &PrintConfigArg) -> anyhow::Result<()> {
    let PrintConfigArg { settings, output } = arg;
    let settings = Settings::load(settings)?;
    Output::save_json(&settings, output.clone())
}
