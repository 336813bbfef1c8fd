//! Crate error type.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Planet name not in the catalog.
    #[error("unknown planet '{0}'")]
    UnknownPlanet(String),

    /// Difficulty name not one of easy/normal/hard.
    #[error("unknown difficulty '{0}' (expected easy, normal or hard)")]
    UnknownDifficulty(String),

    /// Failed to read the config file from disk.
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON config content.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[source] serde_json::Error),

    /// A config value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
