use crate::areas::workspace::{Input, Workspace};
use crate::artifacts::diff::config::DiffConfig;
use crate::artifacts::diff::engine::{DiffOutput, diff};
use colored::Colorize;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// One command-line invocation: where inputs come from, where output goes,
/// and how texts are compared
pub struct Session {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    config: DiffConfig,
}

impl Session {
    pub fn new(
        path: &str,
        writer: Box<dyn std::io::Write>,
        config: DiffConfig,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;

        Ok(Session {
            writer: RefCell::new(writer),
            workspace: Workspace::new(path.into_boxed_path()),
            config,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Reads both operands and runs the engine on them.
    pub fn compare(&self, a: &str, b: &str) -> anyhow::Result<(Input, Input, DiffOutput)> {
        let (a, b) = self.workspace.read_pair(a, b)?;
        let output = diff(&a.content, &b.content, &self.config);

        if output.degraded {
            eprintln!(
                "{}",
                format!(
                    "warning: {} vs {} is too large to align (limit {} token pairs), \
                     showing a full replacement instead",
                    a.label, b.label, self.config.complexity_guard_threshold
                )
                .yellow()
            );
        }

        Ok((a, b, output))
    }
}
