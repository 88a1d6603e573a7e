//! Console table rendering for the `prettylog` crate.
//!
//! Two renderers are provided, each writing finished lines to a caller-supplied
//! sink so table output can be routed through the logging system (one log
//! record per line) or straight to stdout:
//!
//! - **One-shot** ([`oneshot::print_table`]): formats a complete header/row
//!   matrix in one go via [`comfy_table`] and forwards each rendered line.
//! - **Continuous** ([`continuous::ContinuousTable`]): keeps column geometry as
//!   state and emits borders, rules, and rows incrementally, so rows can be
//!   written as a long-running loop produces them.

pub mod continuous;
pub mod oneshot;

/// Continuous table renderer and its column alignment type.
///
/// See [`continuous::ContinuousTable`] for full documentation.
pub use continuous::{Align, ContinuousTable};

/// One-shot table printing functions.
///
/// See [`oneshot::print_table`] for full documentation.
pub use oneshot::{print_table, print_table_with_preset};
