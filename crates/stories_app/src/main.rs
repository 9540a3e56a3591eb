use std::io;

use anyhow::Context;
use stories_app::logging::{self, LogDestination};
use stories_app::{terminal, AppConfig, StoriesApp};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    logging::initialize(LogDestination::File, config.log_level);

    let mut app = StoriesApp::from_config(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    terminal::run(
        &mut app,
        stdin.lock(),
        stdout.lock(),
        config.fetch.request_timeout,
    )
    .context("terminal session failed")?;
    Ok(())
}
