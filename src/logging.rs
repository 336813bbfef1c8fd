//! Tracing setup. Stdout is owned by the TUI, so events go to a file or nowhere.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Installs a file subscriber. `RUST_LOG` wins over `default_filter`.
/// With no path, no subscriber is installed and tracing macros are no-ops.
pub fn init(log_file: Option<&Path>, default_filter: &str) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("invalid log filter '{default_filter}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow::anyhow!("installing tracing subscriber: {err}"))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}
