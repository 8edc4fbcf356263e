//! Diff data structures and algorithms
//!
//! - `core`: Shared utilities (pager wrapper, debug logging)
//! - `diff`: The tokenizer, LCS aligner and the views built on its chunks

pub mod core;
pub mod diff;
