use crate::artifacts::core::debug_log;
use crate::artifacts::diff::alignment::{Row, build_rows, collapse};
use crate::artifacts::diff::chunk::{DiffChunk, merge};
use crate::artifacts::diff::config::DiffConfig;
use crate::artifacts::diff::edit::DiffAlgorithm;
use crate::artifacts::diff::lcs::LcsDiff;
use crate::artifacts::diff::patch::{Hunk, build_hunks, render};
use crate::artifacts::diff::stats::Stats;
use crate::artifacts::diff::token::tokenize;

/// Everything derived from one comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOutput {
    pub chunks: Vec<DiffChunk>,
    pub hunks: Vec<Hunk>,
    pub unified: String,
    pub rows: Vec<Row>,
    pub stats: Stats,
    /// The inputs were too large to align and the trivial script was used
    pub degraded: bool,
}

/// Compares `a` against `b`.
///
/// Pure and infallible: any text is valid input and nothing is shared
/// between calls, so independent comparisons may run on separate threads.
pub fn diff(a: &str, b: &str, config: &DiffConfig) -> DiffOutput {
    let a_tokens = tokenize(a, config.granularity, config.normalization);
    let b_tokens = tokenize(b, config.granularity, config.normalization);
    debug_log!(
        "engine: {} vs {} {} tokens",
        a_tokens.len(),
        b_tokens.len(),
        config.granularity
    );

    let alignment =
        LcsDiff::new(&a_tokens, &b_tokens, config.complexity_guard_threshold).diff();
    let chunks = merge(alignment.edits);

    let hunks = build_hunks(&chunks, config.granularity, config.context_radius);
    let unified = render(&hunks);

    let rows = build_rows(&chunks, config.granularity);
    let rows = if config.collapse_unchanged {
        collapse(rows, config.context_radius)
    } else {
        rows
    };

    let stats = Stats::from_chunks(&chunks);

    DiffOutput {
        chunks,
        hunks,
        unified,
        rows,
        stats,
        degraded: alignment.degraded,
    }
}
