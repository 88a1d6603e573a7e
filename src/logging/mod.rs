//! Logging setup for the `prettylog` crate.
//!
//! Built on the [`log`] facade with a [`log4rs`] backend. Two pieces:
//!
//! - [`format::PrettyEncoder`]: a level-aware line encoder with optional ANSI
//!   colouring, thread names, and source-location detail.
//! - [`config::build_config`] / [`config::init`]: a declarative configuration
//!   wiring one level-filtered console appender and three rotating file
//!   appenders (debug/info/warning tiers) to a single log file.
//!
//! The file appenders always capture full debug detail regardless of the
//! console threshold, so a quiet console never costs diagnostic data.

pub mod config;
pub mod format;

pub use config::{build_config, init};
pub use format::PrettyEncoder;

use anyhow::{Result, bail};
use log::{Level, LevelFilter};
use std::fmt;

/// Log message severity, ordered from least to most important.
///
/// This is the model used throughout the crate for thresholds and formatter
/// selection. `log::Level::Trace` has no counterpart here and is treated as
/// unrecognised; `Critical` exists as the highest tier for configuration even
/// though the [`log`] macros top out at `error!`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    /// Maps a [`log::Level`] onto a severity.
    ///
    /// # Errors
    /// Fails for [`Level::Trace`], which is below the recognised range.
    pub fn from_level(level: Level) -> Result<Self> {
        match level {
            Level::Debug => Ok(Severity::Debug),
            Level::Info => Ok(Severity::Info),
            Level::Warn => Ok(Severity::Warning),
            Level::Error => Ok(Severity::Error),
            Level::Trace => bail!("unrecognised log level: {level}"),
        }
    }

    /// The upper-case level name, as written into log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// The [`LevelFilter`] admitting this severity and above.
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Severity::Debug => LevelFilter::Debug,
            Severity::Info => LevelFilter::Info,
            Severity::Warning => LevelFilter::Warn,
            Severity::Error | Severity::Critical => LevelFilter::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
