use crate::artifacts::diff::chunk::DiffChunk;
use crate::artifacts::diff::edit::Operation;
use std::fmt::Display;

/// Change totals in token units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl Stats {
    pub fn from_chunks<T>(chunks: &[DiffChunk<T>]) -> Self {
        chunks.iter().fold(Self::default(), |mut stats, chunk| {
            match chunk.op {
                Operation::Insert => stats.added += chunk.b_tokens.len(),
                Operation::Delete => stats.removed += chunk.a_tokens.len(),
                Operation::Equal => stats.unchanged += chunk.a_tokens.len(),
            }
            stats
        })
    }

    pub fn has_changes(&self) -> bool {
        self.added > 0 || self.removed > 0
    }

    /// Summary line with each count passed through `paint`, together with
    /// the operation it counts.
    pub fn summary_with<F>(&self, paint: F) -> String
    where
        F: Fn(Operation, String) -> String,
    {
        format!(
            "{} added(+), {} removed(-), {} unchanged",
            paint(Operation::Insert, self.added.to_string()),
            paint(Operation::Delete, self.removed.to_string()),
            paint(Operation::Equal, self.unchanged.to_string())
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary_with(|_, count| count))
    }
}
