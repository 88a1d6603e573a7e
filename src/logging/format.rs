//! Level-aware log line encoding.

use super::Severity;
use chrono::Local;
use console::Style;
use log::Record;
use log4rs::encode::{Encode, Write};
use std::io::Write as _;

/// Timestamp layout shared by every line: `2024-01-31 13:45:02`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A [`log4rs`] encoder producing `timestamp ┆ LEVEL ┆ message` lines.
///
/// Three independent flags adjust the layout, fixed at construction rather
/// than patched per record:
///
/// - `colour`: wrap the whole line in a severity-keyed ANSI style (debug dim,
///   warnings yellow, errors red, critical bright red) with a trailing reset;
/// - `threaded`: append ` | <thread-name>` directly after the level field, so
///   interleaved lines from multiple threads can be told apart in a shared
///   file;
/// - `verbose`: prefix the message with `[<target>:<line>]` source detail.
#[derive(Clone, Debug)]
pub struct PrettyEncoder {
    colour: bool,
    threaded: bool,
    verbose: bool,
}

impl PrettyEncoder {
    pub fn new(colour: bool, threaded: bool, verbose: bool) -> Self {
        Self {
            colour,
            threaded,
            verbose,
        }
    }

    /// Coloured console layout: colour on, no thread or source detail.
    pub fn coloured() -> Self {
        Self::new(true, false, false)
    }

    /// Plain console layout: no colour, thread, or source detail.
    pub fn plain() -> Self {
        Self::new(false, false, false)
    }

    /// Log file layout: uncoloured, with thread names and source locations,
    /// since files are grepped rather than read at a glance.
    pub fn log_file() -> Self {
        Self::new(false, true, true)
    }

    /// The ANSI style for a severity. `Info` stays unstyled.
    fn style_for(severity: Severity) -> Style {
        match severity {
            Severity::Debug => Style::new().dim(),
            Severity::Info => Style::new(),
            Severity::Warning => Style::new().yellow(),
            Severity::Error => Style::new().red(),
            Severity::Critical => Style::new().red().bold(),
        }
    }

    /// Composes the uncoloured line body for one record.
    fn compose(
        &self,
        timestamp: &str,
        severity: Severity,
        thread: &str,
        target: &str,
        line: Option<u32>,
        message: &str,
    ) -> String {
        let mut out = format!("{timestamp} ┆ {:<8}", severity.as_str());
        if self.threaded {
            out.push_str(" | ");
            out.push_str(thread);
        }
        out.push_str(" ┆ ");
        if self.verbose {
            out.push_str(&format!("[{target}:{}] ", line.unwrap_or(0)));
        }
        out.push_str(message);
        out
    }
}

impl Encode for PrettyEncoder {
    fn encode(&self, w: &mut dyn Write, record: &Record) -> anyhow::Result<()> {
        let severity = Severity::from_level(record.level())?;
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let thread = std::thread::current();
        let body = self.compose(
            &timestamp,
            severity,
            thread.name().unwrap_or("<unnamed>"),
            record.target(),
            record.line(),
            &record.args().to_string(),
        );

        if self.colour {
            // Styling is forced: whether the handler ends up on a tty is the
            // caller's decision, made through the colour flag.
            let style = Self::style_for(severity).force_styling(true);
            writeln!(w, "{}", style.apply_to(body))?;
        } else {
            writeln!(w, "{body}")?;
        }

        Ok(())
    }
}
