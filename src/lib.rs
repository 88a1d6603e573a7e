//! Library crate for prettylog
//!
//! Logging configuration and console table tools for command-line programs.
//!
//! # Features
//!
//! - **Logging Setup**: one call wires a level-filtered, optionally coloured
//!   console plus rotating log files that always keep full debug detail
//! - **Level-Aware Formatting**: severity-keyed colours with optional thread
//!   and source-location annotations
//! - **Table Rendering**: one-shot and incrementally-written tables, routed
//!   to any line sink (a print call or a logger method)
//!
//! # Modules
//!
//! - [`logging`]: encoder and configuration builder on top of [`log4rs`]
//! - [`table`]: one-shot and continuous table renderers
//! - [`cli`]: command-line interface for the example binary
//! - [`utils`]: cache directory resolution

pub mod cli;
pub mod logging;
pub mod table;
pub mod utils;

pub use logging::{PrettyEncoder, Severity, build_config, init};
pub use table::{Align, ContinuousTable, print_table, print_table_with_preset};
pub use utils::cache_dir;
