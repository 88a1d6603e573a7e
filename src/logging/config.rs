//! Declarative logging configuration.
//!
//! [`build_config`] assembles a [`log4rs::Config`] with one console appender
//! and three rotating file appenders, all feeding the root logger. The file
//! tiers are fixed (debug, info, warning-and-above) and point at the same log
//! file, so files always retain full detail no matter how quiet the console
//! is asked to be. Rollover itself (size trigger, backup rotation) is handled
//! entirely by [`log4rs`]; this module only supplies the parameters.

use super::{PrettyEncoder, Severity};
use anyhow::{Context, Result, anyhow};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::config::{Appender, Config, Root};
use log4rs::filter::threshold::ThresholdFilter;
use std::fs;
use std::path::Path;

/// Maximum size of the live log file before it rolls over.
const MAX_LOG_BYTES: u64 = 1024 * 1024;

/// Number of rotated backups kept per tier.
const LOG_BACKUPS: u32 = 3;

/// The three file tiers, from most to least verbose. The names land in the
/// config and in diagnostics, so keep them stable.
const FILE_TIERS: [(&str, LevelFilter); 3] = [
    ("debug_file", LevelFilter::Debug),
    ("info_file", LevelFilter::Info),
    ("error_file", LevelFilter::Warn),
];

/// Builds the full logging configuration for a program.
///
/// The console appender writes to stdout, admits records at `console_level`
/// and above, and colours them when `colour` is set. The three file appenders
/// all target `log_file` with a 1 MiB size cap and three retained backups,
/// using the uncoloured file layout (thread names and source locations on).
///
/// Side effect: the parent directory of `log_file` is created if missing,
/// since appender construction opens the file.
///
/// # Errors
/// Fails if the parent directory cannot be created, the log file cannot be
/// opened, or the assembled configuration is rejected by [`log4rs`].
pub fn build_config(log_file: &Path, console_level: Severity, colour: bool) -> Result<Config> {
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory: {}", parent.display()))?;
    }

    let console_encoder = if colour {
        PrettyEncoder::coloured()
    } else {
        PrettyEncoder::plain()
    };
    let console = ConsoleAppender::builder()
        .target(Target::Stdout)
        .encoder(Box::new(console_encoder))
        .build();

    let mut builder = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(
                console_level.to_level_filter(),
            )))
            .build("console", Box::new(console)),
    );

    let mut root = Root::builder().appender("console");

    for (name, threshold) in FILE_TIERS {
        let appender = rolling_file(log_file)?;
        builder = builder.appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(threshold)))
                .build(name, Box::new(appender)),
        );
        root = root.appender(name);
    }

    builder
        .build(root.build(LevelFilter::Debug))
        .context("invalid logging configuration")
}

/// Builds the configuration and installs it as the global [`log`] backend.
///
/// Call once, early in the program. The returned handle can be used to swap
/// the configuration at runtime.
pub fn init(log_file: &Path, console_level: Severity, colour: bool) -> Result<log4rs::Handle> {
    let config = build_config(log_file, console_level, colour)?;
    log4rs::init_config(config).context("failed to install logging configuration")
}

/// One size-rotated file appender on `log_file`, with backups named
/// `<log_file>.1` through `<log_file>.N`.
fn rolling_file(log_file: &Path) -> Result<RollingFileAppender> {
    let backup_pattern = format!("{}.{{}}", log_file.display());
    let roller = FixedWindowRoller::builder()
        .base(1)
        .build(&backup_pattern, LOG_BACKUPS)
        .map_err(|e| anyhow!("invalid backup pattern '{backup_pattern}': {e}"))?;
    let policy = CompoundPolicy::new(
        Box::new(SizeTrigger::new(MAX_LOG_BYTES)),
        Box::new(roller),
    );

    RollingFileAppender::builder()
        .append(true)
        .encoder(Box::new(PrettyEncoder::log_file()))
        .build(log_file, Box::new(policy))
        .with_context(|| format!("failed to open log file: {}", log_file.display()))
}
