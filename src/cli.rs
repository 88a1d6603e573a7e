//! CLI interface definitions for the `prettylog-example` binary.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//!
//! The severity flags are mutually exclusive and select the minimum level
//! shown on the console; log files always capture full debug detail.
//!
//! # Example
//!
//! ```bash
//! prettylog-example --debug --log-file /tmp/demo.log
//! ```
//!
//! # Dependencies
//! - [`clap`] for argument parsing and help generation

use crate::logging::Severity;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the `prettylog-example` binary.
#[derive(Parser, Debug)]
#[command(
    name = "prettylog-example",
    about = "Example program demonstrating prettylog usage"
)]
pub struct Args {
    /// Set the console logging level to DEBUG
    #[arg(short = 'd', long, group = "level")]
    pub debug: bool,

    /// Set the console logging level to INFO (default)
    #[arg(short = 'i', long, group = "level")]
    pub info: bool,

    /// Set the console logging level to WARNING
    #[arg(short = 'w', long, group = "level")]
    pub warning: bool,

    /// Set the console logging level to ERROR
    #[arg(short = 'e', long, group = "level")]
    pub error: bool,

    /// Set the console logging level to CRITICAL
    #[arg(short = 'c', long, group = "level")]
    pub critical: bool,

    /// Disable coloured console output
    #[arg(long)]
    pub no_colour: bool,

    /// Write the log to FILE instead of the default cache location
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// The console severity threshold selected by the flags.
    pub fn console_level(&self) -> Severity {
        if self.debug {
            Severity::Debug
        } else if self.warning {
            Severity::Warning
        } else if self.error {
            Severity::Error
        } else if self.critical {
            Severity::Critical
        } else {
            Severity::Info
        }
    }
}
