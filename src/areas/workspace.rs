use anyhow::Context;
use std::io::Read;
use std::path::{Path, PathBuf};

const STDIN_MARKER: &str = "-";

/// A named text handed to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub label: String,
    pub content: String,
}

/// Resolves command-line operands against a base directory
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Reads both sides of a comparison; at most one of them may be stdin.
    pub fn read_pair(&self, a: &str, b: &str) -> anyhow::Result<(Input, Input)> {
        if a == STDIN_MARKER && b == STDIN_MARKER {
            anyhow::bail!("only one side of the comparison can be read from stdin");
        }

        Ok((self.read_input(a)?, self.read_input(b)?))
    }

    pub fn read_input(&self, operand: &str) -> anyhow::Result<Input> {
        if operand == STDIN_MARKER {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read text from stdin")?;

            return Ok(Input {
                label: "<stdin>".to_string(),
                content,
            });
        }

        let content = self.read_file(Path::new(operand))?;

        Ok(Input {
            label: operand.to_string(),
            content,
        })
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        let full_path = self.resolve(file_path);

        if full_path.is_dir() {
            anyhow::bail!("{} is a directory, expected a text file", file_path.display());
        }

        let bytes = std::fs::read(&full_path)
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        String::from_utf8(bytes)
            .with_context(|| format!("{} is not valid UTF-8 text", file_path.display()))
    }

    fn resolve(&self, file_path: &Path) -> PathBuf {
        if file_path.is_absolute() {
            file_path.to_path_buf()
        } else {
            self.path.join(file_path)
        }
    }
}
