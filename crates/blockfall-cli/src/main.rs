mod command;
mod logging;
mod settings;
mod tui;
mod util;
mod view;

fn main() -> anyhow::Result<()> {
    command::run()
}
