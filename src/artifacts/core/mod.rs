//! Core utilities and shared types
//!
//! This module contains shared utilities used across the application.

use anyhow::Context;
use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// Debug logging, compiled in only with the `debug_diff` feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("lcs: {}x{} table", n, m);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_diff")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub(crate) use debug_log;

/// `Write` adapter feeding the minus pager
///
/// Long patches and split views are written through it when stdout is a
/// terminal; the caller keeps a clone of the pager and hands it to
/// `minus::page_all` once everything has been written.
///
/// ## Usage
///
/// ```ignore
/// let writer = PagerWriter::with_prompt("a.txt -> b.txt")?;
/// let pager = writer.pager().clone();
/// writeln!(writer, "@@ -1,3 +1,3 @@")?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl PagerWriter {
    pub fn with_prompt(prompt: &str) -> anyhow::Result<Self> {
        let pager = Pager::new();
        pager
            .set_prompt(prompt)
            .with_context(|| format!("failed to set pager prompt {prompt:?}"))?;

        Ok(Self::new(pager))
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = std::str::from_utf8(buf).map_err(io::Error::other)?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
