//! Plumbing commands
//!
//! Low-level views of the engine's intermediate stages, useful when a diff
//! looks surprising.
//!
//! - `tokenize`: Print the token stream the aligner sees

pub mod tokenize;
