//! Command implementations
//!
//! - `plumbing`: Low-level commands exposing intermediate engine stages (tokenize)
//! - `porcelain`: User-facing views of a comparison (diff, split, stat)

pub mod plumbing;
pub mod porcelain;
