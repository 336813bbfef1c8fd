//! Game configuration with defaults and optional JSON file loading.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::game::Schedule;
use crate::error::{Error, Result};
use crate::games::sun_chaser::{Difficulty, Planet};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Planet selected at launch.
    pub planet: Planet,
    /// Difficulty selected at launch.
    pub difficulty: Difficulty,
    /// Round length in seconds.
    pub round_secs: u64,
    /// Update cadence period.
    pub update_interval_ms: u64,
    /// Decay cadence period.
    pub decay_interval_ms: u64,
    /// Redraw period.
    pub frame_interval_ms: u64,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Tracing output file. Logging stays off without one, since the
    /// terminal belongs to the game.
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            planet: Planet::Earth,
            difficulty: Difficulty::Normal,
            round_secs: 30,
            update_interval_ms: 100,
            decay_interval_ms: 200,
            frame_interval_ms: 33,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Reads a JSON config. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).map_err(Error::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.round_secs == 0 {
            return Err(Error::InvalidConfig("round_secs must be at least 1"));
        }
        if self.update_interval_ms == 0 || self.decay_interval_ms == 0 {
            return Err(Error::InvalidConfig("cadence intervals must be non-zero"));
        }
        if self.frame_interval_ms == 0 {
            return Err(Error::InvalidConfig("frame_interval_ms must be non-zero"));
        }
        Ok(())
    }

    pub fn round_duration(&self) -> Duration {
        Duration::from_secs(self.round_secs)
    }

    pub fn schedule(&self) -> Schedule {
        Schedule {
            update: Duration::from_millis(self.update_interval_ms),
            decay: Duration::from_millis(self.decay_interval_ms),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_classic_round() {
        let config = GameConfig::default();
        assert_eq!(config.round_duration(), Duration::from_secs(30));
        assert_eq!(config.schedule(), Schedule::default());
        assert_eq!(config.planet, Planet::Earth);
        assert_eq!(config.difficulty, Difficulty::Normal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "planet": "jupiter", "round_secs": 60 }"#).unwrap();
        assert_eq!(config.planet, Planet::Jupiter);
        assert_eq!(config.round_secs, 60);
        assert_eq!(config.difficulty, Difficulty::Normal);
        assert_eq!(config.update_interval_ms, 100);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "round_secs": 0 }"#),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "decay_interval_ms": 0 }"#),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "planet": "pluto" }"#),
            Err(Error::ConfigParse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "difficulty": "hard", "log_level": "debug" }}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_log_file_from_json() {
        let config =
            GameConfig::from_json(r#"{ "log_level": "trace", "log_file": "/tmp/sunchaser.log" }"#).unwrap();
        assert_eq!(config.log_level, "trace");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/sunchaser.log")));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
