//! Invocation plumbing
//!
//! - `session`: Output writer and diff configuration shared by all commands
//! - `workspace`: Reads the texts to compare from files or stdin

pub mod session;
pub mod workspace;
