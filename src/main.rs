//! Main entry point for the `prettylog-example` binary.
//!
//! Demonstrates the crate end to end:
//!
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Installs the logging configuration (coloured console at the chosen
//!   level, rotating debug-detail log files under the user's cache directory)
//! - Emits one message per severity
//! - Prints a one-shot table through the info-level logger
//! - Renders a continuous table row by row with a simulated workload, routing
//!   one row through the warn-level logger to show a per-row sink override
//!
//! # Flags of Interest
//! - `-d/--debug` … `-c/--critical`: console severity (mutually exclusive)
//! - `--no-colour`: plain console output
//! - `--log-file FILE`: override the default log location

use anyhow::{Result, anyhow};
use clap::Parser;
use log::{debug, error, info, warn};
use prettylog::cli::Args;
use prettylog::table::{Align, ContinuousTable, print_table};
use prettylog::{cache_dir, logging};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// A random integer in `1..=100`, from the system RNG.
fn random_number() -> Result<u32> {
    let mut buf = [0u8; 4];
    getrandom::fill(&mut buf).map_err(|e| anyhow!("failed to read system randomness: {e}"))?;
    Ok(1 + u32::from_le_bytes(buf) % 100)
}

/// Picks the log file location: CLI override, else the user cache directory.
fn log_file_path(args: &Args) -> Result<PathBuf> {
    match &args.log_file {
        Some(path) => Ok(path.clone()),
        None => Ok(cache_dir()?
            .join("prettylog")
            .join("prettylog-example.log")),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging before anything else so every message is captured.
    let log_file = log_file_path(&args)?;
    logging::init(&log_file, args.console_level(), !args.no_colour)?;

    info!("Welcome to the prettylog example!");
    info!("Log is also saved to: {}", log_file.display());

    // One message per severity.
    debug!("This is a DEBUG message.");
    info!("This is an INFO message.");
    warn!("This is a WARNING message.");
    error!("This is an ERROR message.");

    // A one-shot table, one log record per line.
    print_table(
        &["Column 1", "Column 2", "Column 3"],
        &[
            vec!["Row 1, Col 1", "Row 1, Col 2", "Row 1, Col 3"],
            vec!["Row 2, Col 1", "Row 2, Col 2", "Row 2, Col 3"],
            vec!["Row 3, Col 1", "Row 3, Col 2", "Row 3, Col 3"],
        ],
        |line| info!("{line}"),
    );

    // A continuous table, written as the "work" progresses.
    let mut table = ContinuousTable::with_sink(
        vec![20, 20],
        vec![Align::Right, Align::Right],
        |line: &str| info!("{line}"),
    )?;
    table.start();
    table.row_with(
        &["Row", "Random Number"],
        Some(&[Align::Centre, Align::Centre]),
        None,
    )?;
    table.hr();

    for i in 1..=10 {
        // Simulate work being done.
        thread::sleep(Duration::from_secs(1));

        let values = [format!("Row {i}"), random_number()?.to_string()];
        if i == 4 {
            // Highlight one row by routing it through the warn-level sink.
            table.row_with(&values, None, Some(&mut |line: &str| warn!("{line}")))?;
        } else {
            table.row(&values)?;
        }
    }
    table.end();

    Ok(())
}
