use std::path::PathBuf;

use clap::Parser;

use crate::config::GameConfig;
use crate::error::Result;
use crate::games::sun_chaser::{Difficulty, Planet};

/// CLI values override settings loaded from `--config`.
#[derive(Parser, Debug)]
#[command(name = "sunchaser")]
#[command(about = "☀ Sun Chaser: run fast enough to keep the sun still in the sky")]
#[command(version)]
pub struct Cli {
    /// Planet to start on (mercury, venus, earth, mars, jupiter, saturn, uranus, neptune)
    #[arg(short, long)]
    pub planet: Option<Planet>,

    /// Difficulty (easy, normal, hard)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Round length in seconds
    #[arg(long)]
    pub round_secs: Option<u64>,

    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write tracing output to this file (the terminal belongs to the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Tracing filter, e.g. "debug" or "sunchaser=trace"
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Loads the config file if one was given, then applies flag overrides.
    pub fn resolve_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(planet) = self.planet {
            config.planet = planet;
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(secs) = self.round_secs {
            config.round_secs = secs;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
        config.validate()?;
        Ok(config)
    }
}
