use crate::areas::session::Session;
use crate::artifacts::diff::edit::Operation;
use colored::Colorize;

impl Session {
    /// Prints only the change totals for `a` against `b`.
    ///
    /// Returns whether the texts differ.
    pub fn stat(&self, a: &str, b: &str) -> anyhow::Result<bool> {
        let (a, b, output) = self.compare(a, b)?;
        let stats = output.stats;

        writeln!(
            self.writer(),
            "{} -> {} ({} tokens)",
            a.label.bold(),
            b.label.bold(),
            self.config().granularity
        )?;
        let summary = stats.summary_with(|op, count| match op {
            Operation::Insert => count.green().to_string(),
            Operation::Delete => count.red().to_string(),
            Operation::Equal => count,
        });
        writeln!(self.writer(), " {summary}")?;

        Ok(stats.has_changes())
    }
}
