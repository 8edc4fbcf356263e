use crate::areas::session::Session;
use crate::areas::workspace::Input;
use crate::artifacts::diff::patch::Hunk;
use colored::Colorize;

#[derive(Debug, Clone, Default)]
pub struct PatchOptions {
    /// Print `--- a/<old>` and `+++ b/<new>` before the hunks
    pub headers: bool,
    /// Append the added/removed/unchanged summary
    pub stat: bool,
}

impl Session {
    /// Prints the unified patch turning `a` into `b`.
    ///
    /// Returns whether the texts differ.
    pub fn diff(&self, a: &str, b: &str, opts: &PatchOptions) -> anyhow::Result<bool> {
        let (a, b, output) = self.compare(a, b)?;

        if output.stats.has_changes() {
            if opts.headers {
                self.print_file_headers(&a, &b)?;
            }

            for hunk in &output.hunks {
                self.print_diff_hunk(hunk)?;
            }
        }

        if opts.stat {
            writeln!(self.writer(), " {}", output.stats)?;
        }

        Ok(output.stats.has_changes())
    }

    fn print_file_headers(&self, a: &Input, b: &Input) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", format!("--- a/{}", a.label).bold())?;
        writeln!(self.writer(), "{}", format!("+++ b/{}", b.label).bold())?;

        Ok(())
    }

    fn print_diff_hunk(&self, hunk: &Hunk) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", hunk.header().cyan())?;

        for line in &hunk.lines {
            let line = match line.chars().next() {
                Some('-') => line.red(),
                Some('+') => line.green(),
                _ => line.normal(),
            };
            writeln!(self.writer(), "{}", line)?;
        }

        Ok(())
    }
}
