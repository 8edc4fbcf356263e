use crate::artifacts::diff::chunk::{DiffChunk, line_chunks};
use crate::artifacts::diff::config::Granularity;
use crate::artifacts::diff::edit::Operation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Equal,
    Insert,
    Delete,
    /// Stands in for `hidden` unchanged rows removed by collapsing
    Collapsed { hidden: usize },
}

/// One line of the two-column view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub left: Option<String>,
    pub right: Option<String>,
    pub kind: RowKind,
}

impl Row {
    pub fn equal(left: Option<String>, right: Option<String>) -> Self {
        Self {
            left,
            right,
            kind: RowKind::Equal,
        }
    }

    pub fn deleted(left: String) -> Self {
        Self {
            left: Some(left),
            right: None,
            kind: RowKind::Delete,
        }
    }

    pub fn inserted(right: String) -> Self {
        Self {
            left: None,
            right: Some(right),
            kind: RowKind::Insert,
        }
    }

    pub fn collapsed(hidden: usize) -> Self {
        let label = format!("… {hidden} unchanged lines …");
        Self {
            left: Some(label.clone()),
            right: Some(label),
            kind: RowKind::Collapsed { hidden },
        }
    }

    pub fn is_equal(&self) -> bool {
        self.kind == RowKind::Equal
    }
}

/// Projects chunks onto line-grained rows.
///
/// `Equal` chunks pair their lines index-wise and pad the shorter side with
/// blanks; `Delete` and `Insert` chunks fill only their own column.
pub fn build_rows(chunks: &[DiffChunk], granularity: Granularity) -> Vec<Row> {
    let mut rows = Vec::new();

    for chunk in line_chunks(chunks, granularity) {
        match chunk.op {
            Operation::Equal => {
                let mut left = chunk.a_tokens.into_iter();
                let mut right = chunk.b_tokens.into_iter();
                loop {
                    match (left.next(), right.next()) {
                        (None, None) => break,
                        (l, r) => rows.push(Row::equal(l, r)),
                    }
                }
            }
            Operation::Delete => rows.extend(chunk.a_tokens.into_iter().map(Row::deleted)),
            Operation::Insert => rows.extend(chunk.b_tokens.into_iter().map(Row::inserted)),
        }
    }

    rows
}

/// Folds long unchanged runs down to their edges.
///
/// A run of `Equal` rows longer than `2 * radius + 1` keeps its first and
/// last `radius` rows with a single placeholder in between; shorter runs are
/// left alone, since a placeholder would hide no more than one row.
pub fn collapse(rows: Vec<Row>, context_radius: usize) -> Vec<Row> {
    let limit = context_radius.saturating_mul(2).saturating_add(1);
    let mut collapsed = Vec::with_capacity(rows.len());
    let mut run: Vec<Row> = Vec::new();

    for row in rows {
        if row.is_equal() {
            run.push(row);
            continue;
        }
        flush_run(&mut collapsed, std::mem::take(&mut run), context_radius, limit);
        collapsed.push(row);
    }
    flush_run(&mut collapsed, run, context_radius, limit);

    collapsed
}

fn flush_run(out: &mut Vec<Row>, run: Vec<Row>, context_radius: usize, limit: usize) {
    if run.len() <= limit {
        out.extend(run);
        return;
    }

    // run.len() > 2 * context_radius + 1
    let hidden = run.len() - 2 * context_radius;
    let mut run = run.into_iter();

    out.extend(run.by_ref().take(context_radius));
    out.push(Row::collapsed(hidden));
    out.extend(run.skip(hidden));
}
