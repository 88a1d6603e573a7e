//! Incrementally-written table rendering.
//!
//! Unlike the one-shot renderer, [`ContinuousTable`] does not need the full
//! data set upfront: it stores the column geometry and emits one finished line
//! per call, so a caller can interleave rows with ongoing computation (for
//! example, a progress table written one row per loop iteration).

use anyhow::{Result, bail, ensure};
use std::fmt::Display;
use std::fmt::Write as _;

/// Horizontal alignment of a value within its column.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Align {
    Left,
    Right,
    Centre,
}

impl Align {
    /// Parses the conventional alignment symbols: `<` (left), `>` (right),
    /// `^` (centre).
    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            '<' => Ok(Align::Left),
            '>' => Ok(Align::Right),
            '^' => Ok(Align::Centre),
            other => bail!("invalid alignment symbol '{other}': expected '<', '>', or '^'"),
        }
    }
}

/// A table written to its sink one line at a time.
///
/// Column widths and alignments are fixed at construction; each of
/// [`start`](Self::start), [`hr`](Self::hr), [`row`](Self::row), and
/// [`end`](Self::end) emits exactly one line. Alignment and sink can be
/// overridden per row via [`row_with`](Self::row_with), which lets a caller
/// highlight a single row (e.g. route it through a different log level)
/// without reconfiguring the table.
///
/// # Examples
///
/// ```rust
/// use prettylog::table::{Align, ContinuousTable};
///
/// let mut table = ContinuousTable::new(vec![10, 10], vec![Align::Right, Align::Right])?;
/// table.start();
/// table.row(&["Row 1", "42"])?;
/// table.end();
/// # anyhow::Ok(())
/// ```
pub struct ContinuousTable {
    col_widths: Vec<usize>,
    col_align: Vec<Align>,
    sink: Box<dyn FnMut(&str)>,
}

impl ContinuousTable {
    /// Creates a table that writes to stdout.
    ///
    /// # Errors
    /// Fails if `col_widths` is empty, contains a zero width, or does not
    /// match `col_align` in length. No partially-constructed table is
    /// observable on failure.
    pub fn new(col_widths: Vec<usize>, col_align: Vec<Align>) -> Result<Self> {
        Self::with_sink(col_widths, col_align, |line| println!("{line}"))
    }

    /// Creates a table that writes each finished line to `sink`.
    ///
    /// The sink is any single-argument callable taking one line of text; a
    /// closure wrapping a logging macro works as well as a plain print.
    pub fn with_sink(
        col_widths: Vec<usize>,
        col_align: Vec<Align>,
        sink: impl FnMut(&str) + 'static,
    ) -> Result<Self> {
        ensure!(
            !col_widths.is_empty(),
            "col_widths must be a non-empty list of positive integers"
        );
        ensure!(
            col_widths.iter().all(|w| *w > 0),
            "col_widths must contain only positive integers"
        );
        ensure!(
            col_widths.len() == col_align.len(),
            "col_widths and col_align must have the same length ({} vs {})",
            col_widths.len(),
            col_align.len()
        );

        Ok(Self {
            col_widths,
            col_align,
            sink: Box::new(sink),
        })
    }

    /// Emits the top border line.
    pub fn start(&mut self) {
        let line = self.rule('┌', '┬', '┐');
        (self.sink)(&line);
    }

    /// Emits a horizontal rule separating rows (e.g. under a header row).
    pub fn hr(&mut self) {
        let line = self.rule('├', '┼', '┤');
        (self.sink)(&line);
    }

    /// Emits the bottom border line.
    pub fn end(&mut self) {
        let line = self.rule('└', '┴', '┘');
        (self.sink)(&line);
    }

    /// Emits one data row using the table's default alignments and sink.
    ///
    /// # Errors
    /// Fails if `values` holds more entries than the table has columns.
    pub fn row<T: Display>(&mut self, values: &[T]) -> Result<()> {
        self.row_with(values, None, None)
    }

    /// Emits one data row with optional per-row alignment and sink overrides.
    ///
    /// # Errors
    /// Fails if `values` holds more entries than the table has columns, or if
    /// an alignment override is shorter than the row.
    pub fn row_with<T: Display>(
        &mut self,
        values: &[T],
        col_align: Option<&[Align]>,
        sink: Option<&mut dyn FnMut(&str)>,
    ) -> Result<()> {
        let align = col_align.unwrap_or(&self.col_align);
        let line = compose_row(&self.col_widths, align, values)?;

        match sink {
            Some(sink) => sink(&line),
            None => (self.sink)(&line),
        }

        Ok(())
    }

    /// Builds a border line: one run of `width + 2` horizontals per column,
    /// joined by `mid` and capped with `left`/`right`.
    fn rule(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self
            .col_widths
            .iter()
            .map(|width| "─".repeat(width + 2))
            .collect();

        format!("{left}{}{right}", segments.join(&mid.to_string()))
    }
}

/// Renders one row: each value padded to its column width with the effective
/// alignment, columns separated by `│` with single-space padding.
///
/// A value whose text exceeds its column width widens the field rather than
/// being truncated, so alignment degrades gracefully instead of losing data.
fn compose_row<T: Display>(widths: &[usize], align: &[Align], values: &[T]) -> Result<String> {
    ensure!(
        values.len() <= widths.len(),
        "row has {} values but the table only has {} columns",
        values.len(),
        widths.len()
    );
    ensure!(
        align.len() >= values.len(),
        "alignment override covers {} columns but the row has {} values",
        align.len(),
        values.len()
    );

    let mut line = String::from("│ ");
    for (i, value) in values.iter().enumerate() {
        let text = value.to_string();
        let width = widths[i];
        match align[i] {
            Align::Left => write!(line, "{text:<width$}")?,
            Align::Right => write!(line, "{text:>width$}")?,
            Align::Centre => write!(line, "{text:^width$}")?,
        }
        line.push_str(" │ ");
    }

    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// A sink that collects emitted lines for inspection.
    fn capture() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&str) + 'static) {
        let lines = Rc::new(RefCell::new(Vec::new()));
        let writer = Rc::clone(&lines);
        (lines, move |line: &str| {
            writer.borrow_mut().push(line.to_string())
        })
    }

    fn table(widths: Vec<usize>, align: Vec<Align>) -> (Rc<RefCell<Vec<String>>>, ContinuousTable) {
        let (lines, sink) = capture();
        let table = ContinuousTable::with_sink(widths, align, sink).unwrap();
        (lines, table)
    }

    #[test]
    fn empty_widths_rejected() {
        assert!(ContinuousTable::new(vec![], vec![]).is_err());
    }

    #[test]
    fn zero_width_rejected() {
        let result = ContinuousTable::new(vec![10, 0], vec![Align::Left, Align::Left]);
        assert!(result.is_err());
    }

    #[test]
    fn mismatched_lengths_rejected() {
        let result = ContinuousTable::new(vec![10, 10], vec![Align::Left]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_alignment_symbol_rejected() {
        assert!(Align::from_symbol('x').is_err());
        assert_eq!(Align::from_symbol('<').unwrap(), Align::Left);
        assert_eq!(Align::from_symbol('>').unwrap(), Align::Right);
        assert_eq!(Align::from_symbol('^').unwrap(), Align::Centre);
    }

    #[test]
    fn borders_have_correct_glyphs_and_length() {
        let (lines, mut table) = table(vec![4, 6], vec![Align::Left, Align::Left]);
        table.start();
        table.hr();
        table.end();

        let lines = lines.borrow();
        assert_eq!(lines.len(), 3);

        // Each line: widths + 2 padding chars per column, plus 3 junctions.
        let expected_len = (4 + 2) + (6 + 2) + 3;
        for line in lines.iter() {
            assert_eq!(line.chars().count(), expected_len);
        }

        assert_eq!(lines[0], "┌──────┬────────┐");
        assert_eq!(lines[1], "├──────┼────────┤");
        assert_eq!(lines[2], "└──────┴────────┘");
    }

    #[test]
    fn row_right_aligned_reference_line() {
        let (lines, mut table) = table(vec![10, 10], vec![Align::Right, Align::Right]);
        table.row(&["Row 1", "42"]).unwrap();

        assert_eq!(lines.borrow()[0], "│      Row 1 │         42 │ ");
    }

    #[test]
    fn row_alignment_variants() {
        let (lines, mut table) = table(vec![6], vec![Align::Left]);
        table.row(&["ab"]).unwrap();
        table.row_with(&["ab"], Some(&[Align::Right]), None).unwrap();
        table.row_with(&["ab"], Some(&[Align::Centre]), None).unwrap();

        let lines = lines.borrow();
        assert_eq!(lines[0], "│ ab     │ ");
        assert_eq!(lines[1], "│     ab │ ");
        assert_eq!(lines[2], "│   ab   │ ");
    }

    #[test]
    fn oversized_value_widens_instead_of_truncating() {
        let (lines, mut table) = table(vec![4], vec![Align::Right]);
        table.row(&["much longer than four"]).unwrap();

        let lines = lines.borrow();
        assert!(lines[0].contains("much longer than four"));
    }

    #[test]
    fn too_many_values_rejected() {
        let (_, mut table) = table(vec![4], vec![Align::Left]);
        assert!(table.row(&["a", "b"]).is_err());
    }

    #[test]
    fn short_alignment_override_rejected() {
        let (_, mut table) = table(vec![4, 4], vec![Align::Left, Align::Left]);
        let result = table.row_with(&["a", "b"], Some(&[Align::Right]), None);
        assert!(result.is_err());
    }

    #[test]
    fn sink_override_routes_single_row() {
        let (default_lines, mut table) = table(vec![4], vec![Align::Left]);
        let (override_lines, mut override_sink) = capture();

        table.row(&["a"]).unwrap();
        table.row_with(&["b"], None, Some(&mut override_sink)).unwrap();
        table.row(&["c"]).unwrap();

        assert_eq!(default_lines.borrow().len(), 2);
        assert_eq!(override_lines.borrow().len(), 1);
        assert!(override_lines.borrow()[0].contains('b'));
    }

    #[test]
    fn fewer_values_than_columns_allowed() {
        let (lines, mut table) = table(vec![4, 4], vec![Align::Left, Align::Left]);
        table.row(&["a"]).unwrap();

        assert_eq!(lines.borrow()[0], "│ a    │ ");
    }
}
