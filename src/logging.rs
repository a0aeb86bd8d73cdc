//! Logger setup.
//!
//! The game owns the terminal in raw mode, so log lines cannot go to
//! stderr. Logging is off unless a file is configured.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

/// Install `env_logger` writing to `path` (appending). `RUST_LOG` controls
/// filtering and defaults to `info`. Does nothing when `path` is `None`.
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("failed to install logger")?;

    Ok(())
}
