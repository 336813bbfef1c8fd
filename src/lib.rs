pub mod core {
	pub mod cadence;
	pub mod engine;
	pub mod game;
}

pub mod cli;
pub mod config;
pub mod error;
pub mod games;
pub mod logging;

// Re-export for convenience
pub use crate::core::game::{Context, Game};
pub use crate::error::{Error, Result};
