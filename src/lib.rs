//! Text diff and patch engine
//!
//! Compares two texts at line, word or character granularity using a
//! longest-common-subsequence alignment, then renders the result as a
//! unified patch, a two-column view and change statistics.
//!
//! ```
//! use tdiff::artifacts::diff::config::DiffConfig;
//! use tdiff::artifacts::diff::engine::diff;
//!
//! let output = diff("a\nb\nc", "a\nx\nc", &DiffConfig::default());
//! assert_eq!(output.unified, "@@ -1,3 +1,3 @@\n a\n-b\n+x\n c\n");
//! ```

use is_terminal::IsTerminal;

pub mod areas;
pub mod artifacts;
pub mod commands;

/// When to emit ANSI colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorWhen {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    pub fn apply(self) {
        let enabled = match self {
            ColorWhen::Auto => std::io::stdout().is_terminal(),
            ColorWhen::Always => true,
            ColorWhen::Never => false,
        };
        colored::control::set_override(enabled);
    }
}
