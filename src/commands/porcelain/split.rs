use crate::areas::session::Session;
use crate::artifacts::diff::alignment::{Row, RowKind};
use colored::Colorize;

pub const DEFAULT_COLUMN_WIDTH: usize = 60;
const ELLIPSIS: char = '…';

#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Width of the left column, gutter included
    pub width: usize,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_COLUMN_WIDTH,
        }
    }
}

impl Session {
    /// Prints `a` and `b` side by side, one row per line.
    ///
    /// Returns whether the texts differ.
    pub fn split(&self, a: &str, b: &str, opts: &SplitOptions) -> anyhow::Result<bool> {
        let (_, _, output) = self.compare(a, b)?;

        for row in &output.rows {
            self.print_row(row, opts.width)?;
        }

        Ok(output.stats.has_changes())
    }

    fn print_row(&self, row: &Row, width: usize) -> anyhow::Result<()> {
        let left = fit(&cell(row.kind, row.left.as_deref(), '-'), width);
        let right = cell(row.kind, row.right.as_deref(), '+');

        let (left, right) = match row.kind {
            RowKind::Equal => (left.normal(), right.normal()),
            RowKind::Delete => (left.red(), right.normal()),
            RowKind::Insert => (left.normal(), right.green()),
            RowKind::Collapsed { .. } => (left.dimmed(), right.dimmed()),
        };

        let line = format!("{} | {}", left, right);
        writeln!(self.writer(), "{}", line.trim_end())?;

        Ok(())
    }
}

/// Text of one side of a row with its change marker.
fn cell(kind: RowKind, text: Option<&str>, marker: char) -> String {
    match (kind, text) {
        (_, None) => String::new(),
        (RowKind::Equal | RowKind::Collapsed { .. }, Some(text)) => format!("  {text}"),
        (RowKind::Delete | RowKind::Insert, Some(text)) => format!("{marker} {text}"),
    }
}

/// Pads or truncates to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();

    if len <= width {
        format!("{text:<width$}")
    } else if width == 0 {
        String::new()
    } else {
        let mut truncated = text.chars().take(width - 1).collect::<String>();
        truncated.push(ELLIPSIS);
        truncated
    }
}
