use anyhow::Result;
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use sunchaser::cli::Cli;
use sunchaser::games::sun_chaser;
use sunchaser::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    logging::init(config.log_file.as_deref(), &config.log_level)?;
    tracing::info!(?config, "starting sun chaser");

    let terminal = ratatui::init();
    crossterm::execute!(std::io::stdout(), EnableMouseCapture)?;

    let result = sun_chaser::run_game(&config, terminal).await;

    let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    if let Err(err) = &result {
        tracing::error!(error = %err, "game exited with error");
    }
    result
}
