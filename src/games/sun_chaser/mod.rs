pub mod catalog;
pub mod game;
pub mod renderer;
pub mod round;

pub use catalog::{Difficulty, Planet};
pub use game::SunChaserGame;
pub use round::GameEngine;

use crate::config::GameConfig;
use crate::core::engine::Engine;
use anyhow::Result;
use ratatui::DefaultTerminal;

/// Game runner for Sun Chaser
pub async fn run_game(config: &GameConfig, terminal: DefaultTerminal) -> Result<()> {
    let engine = GameEngine::new(config.planet, config.difficulty, config.round_duration());
    let game = SunChaserGame::new(engine, config.schedule());
    Engine::new(game, config.frame_interval()).run(terminal).await
}
