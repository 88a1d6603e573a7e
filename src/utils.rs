//! Utility functions for the `prettylog` crate.
//!
//! Currently just cache directory resolution, used by the example binary to
//! pick a default log file location.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the per-user cache directory.
///
/// Prefers the `XDG_CACHE_HOME` environment variable; falls back to
/// `$HOME/.cache`. Pure lookup, no directories are created.
///
/// # Errors
/// Fails if neither `XDG_CACHE_HOME` nor `HOME` is set.
pub fn cache_dir() -> Result<PathBuf> {
    if let Ok(xdg_cache) = std::env::var("XDG_CACHE_HOME") {
        Ok(PathBuf::from(xdg_cache))
    } else {
        let home = std::env::var("HOME")
            .context("neither XDG_CACHE_HOME nor HOME environment variables are set")?;
        Ok(PathBuf::from(home).join(".cache"))
    }
}
