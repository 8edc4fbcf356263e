//! Unified-diff serialization
//!
//! Chunks are fed to a [`HunkBuilder`], which tracks the 1-based line cursor
//! of both texts and accumulates prefixed lines while a hunk is open. Only
//! the `@@ -a,n +b,m @@` headers and bodies are produced; there are no
//! `---`/`+++` file lines because the engine does not know about files.

use crate::artifacts::core::debug_log;
use crate::artifacts::diff::chunk::{DiffChunk, line_chunks};
use crate::artifacts::diff::config::Granularity;
use crate::artifacts::diff::edit::Operation;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    pub a_start: usize,
    pub a_count: usize,
    pub b_start: usize,
    pub b_count: usize,
    /// Body lines, each prefixed with `' '`, `'-'` or `'+'`
    pub lines: Vec<String>,
}

impl Hunk {
    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.a_start, self.a_count, self.b_start, self.b_count
        )
    }
}

impl Display for Hunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.header())?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HunkState {
    Outside,
    InHunk,
}

/// State machine turning a stream of line runs into hunks
#[derive(Debug, Clone)]
pub struct HunkBuilder {
    context_radius: usize,
    a_line: usize,
    b_line: usize,
    state: HunkState,
    pending: Vec<String>,
    leading: Vec<String>,
    hunks: Vec<Hunk>,
}

impl HunkBuilder {
    pub fn new(context_radius: usize) -> Self {
        Self {
            context_radius,
            a_line: 1,
            b_line: 1,
            state: HunkState::Outside,
            pending: Vec::new(),
            leading: Vec::new(),
            hunks: Vec::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == HunkState::InHunk
    }

    /// Feeds a run of lines present in both texts.
    ///
    /// Inside a hunk, a run of at most `2 * radius` lines that is not the
    /// last one stays in the hunk as context. Anything longer closes the
    /// hunk after `radius` lines and keeps its final `radius` lines as
    /// leading context for the next one.
    pub fn push_unchanged(&mut self, lines: &[String], is_last: bool) {
        let radius = self.context_radius;

        match self.state {
            HunkState::Outside => {
                self.advance(lines.len(), lines.len());
                self.remember_leading(lines);
            }
            HunkState::InHunk if !is_last && lines.len() <= radius.saturating_mul(2) => {
                self.pending
                    .extend(lines.iter().map(|line| prefixed(Operation::Equal, line)));
                self.advance(lines.len(), lines.len());
            }
            HunkState::InHunk => {
                let trailing = radius.min(lines.len());
                self.pending.extend(
                    lines[..trailing]
                        .iter()
                        .map(|line| prefixed(Operation::Equal, line)),
                );
                self.advance(trailing, trailing);
                self.flush();

                let rest = &lines[trailing..];
                self.advance(rest.len(), rest.len());
                self.remember_leading(rest);
            }
        }
    }

    pub fn push_deleted(&mut self, lines: &[String]) {
        self.open();
        self.pending
            .extend(lines.iter().map(|line| prefixed(Operation::Delete, line)));
        self.advance(lines.len(), 0);
    }

    pub fn push_inserted(&mut self, lines: &[String]) {
        self.open();
        self.pending
            .extend(lines.iter().map(|line| prefixed(Operation::Insert, line)));
        self.advance(0, lines.len());
    }

    /// Emits the pending hunk, if any, and leaves the hunk.
    ///
    /// Counts come from the pending prefixes and starts from the cursor, so
    /// a pure insertion reports `a_count = 0` with `a_start` at the line it
    /// is inserted before.
    pub fn flush(&mut self) {
        self.state = HunkState::Outside;

        if self.pending.is_empty() {
            return;
        }

        let lines = std::mem::take(&mut self.pending);
        let a_count = lines
            .iter()
            .filter(|line| line.starts_with([' ', '-']))
            .count();
        let b_count = lines
            .iter()
            .filter(|line| line.starts_with([' ', '+']))
            .count();

        let hunk = Hunk {
            a_start: self.a_line - a_count,
            a_count,
            b_start: self.b_line - b_count,
            b_count,
            lines,
        };
        debug_log!("patch: flushing {}", hunk.header());

        self.hunks.push(hunk);
    }

    pub fn finish(mut self) -> Vec<Hunk> {
        self.flush();
        self.hunks
    }

    fn open(&mut self) {
        if self.state == HunkState::Outside {
            self.state = HunkState::InHunk;
            let leading = std::mem::take(&mut self.leading);
            self.pending.extend(
                leading
                    .iter()
                    .map(|line| prefixed(Operation::Equal, line)),
            );
        }
    }

    fn advance(&mut self, a_lines: usize, b_lines: usize) {
        self.a_line += a_lines;
        self.b_line += b_lines;
    }

    fn remember_leading(&mut self, lines: &[String]) {
        let from = lines.len().saturating_sub(self.context_radius);
        self.leading = lines[from..].to_vec();
    }
}

fn prefixed(op: Operation, line: &str) -> String {
    format!("{}{}", op.marker(), line)
}

/// Builds hunks over the line view of `chunks`.
///
/// Word and char chunks are first regrouped into whole lines, so headers
/// always count lines of the two texts.
pub fn build_hunks(
    chunks: &[DiffChunk],
    granularity: Granularity,
    context_radius: usize,
) -> Vec<Hunk> {
    let chunks = line_chunks(chunks, granularity);
    let mut builder = HunkBuilder::new(context_radius);

    for (idx, chunk) in chunks.iter().enumerate() {
        match chunk.op {
            Operation::Equal => builder.push_unchanged(&chunk.a_tokens, idx + 1 == chunks.len()),
            Operation::Delete => builder.push_deleted(&chunk.a_tokens),
            Operation::Insert => builder.push_inserted(&chunk.b_tokens),
        }
    }

    builder.finish()
}

pub fn build_unified(chunks: &[DiffChunk], granularity: Granularity, context_radius: usize) -> String {
    render(&build_hunks(chunks, granularity, context_radius))
}

pub fn render(hunks: &[Hunk]) -> String {
    hunks.iter().map(|hunk| hunk.to_string()).collect()
}
