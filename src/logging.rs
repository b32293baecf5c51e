//! Logger setup.
//!
//! The game owns the terminal in raw mode, so stderr output lands on top of
//! the frames. With `RUNNER_LOG_PATH` set, records are appended to that file
//! instead; otherwise they go to stderr as usual and should be redirected
//! (`2>runner.log`) when `RUST_LOG` is enabled.

use std::fs::{File, OpenOptions};

use anyhow::{Context, Result};

/// `RUNNER_LOG_PATH`, trimmed; empty counts as unset.
pub fn log_path_from_env() -> Option<String> {
    non_empty(std::env::var("RUNNER_LOG_PATH").ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

pub fn open_log_file(path: &str) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path))
}

/// Install the global logger, filtered by `RUST_LOG`.
pub fn init(path: Option<&str>) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = path {
        let file = open_log_file(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init().context("logger already installed")
}
