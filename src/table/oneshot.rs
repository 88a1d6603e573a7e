//! One-shot table printing.
//!
//! Layout is delegated to [`comfy_table`]; the rendered block is then split
//! into individual lines and forwarded to the sink one at a time. The sink may
//! be a logging call that treats each invocation as one independent record, so
//! a multi-line block has to be decomposed before dispatch.

use comfy_table::Table;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use std::fmt::Display;

/// Default table style: UTF-8 outline with a header rule and no per-row rules.
pub const DEFAULT_PRESET: &str = UTF8_FULL_CONDENSED;

/// Formats `headers` and `rows` as a table and writes each rendered line to
/// `sink`, in order, using the default style.
///
/// # Examples
///
/// ```rust
/// use prettylog::table::print_table;
///
/// print_table(
///     &["Column 1", "Column 2"],
///     &[vec!["a", "b"], vec!["c", "d"]],
///     |line| log::info!("{line}"),
/// );
/// ```
pub fn print_table<T, S>(headers: &[T], rows: &[Vec<T>], sink: S)
where
    T: Display,
    S: FnMut(&str),
{
    print_table_with_preset(headers, rows, DEFAULT_PRESET, sink)
}

/// Like [`print_table`], but with a caller-chosen [`comfy_table`] preset
/// string controlling the border style.
pub fn print_table_with_preset<T, S>(headers: &[T], rows: &[Vec<T>], preset: &str, mut sink: S)
where
    T: Display,
    S: FnMut(&str),
{
    let mut table = Table::new();
    table.load_preset(preset);
    table.set_header(headers.iter().map(|h| h.to_string()));
    for row in rows {
        table.add_row(row.iter().map(|cell| cell.to_string()));
    }

    for line in table.lines() {
        sink(&line);
    }
}
