//! Porcelain commands (user-facing views of a comparison)
//!
//! ## Commands
//!
//! - `diff`: Unified patch with optional file headers and summary
//! - `split`: Two-column view with collapsed unchanged runs
//! - `stat`: Added/removed/unchanged token totals

pub mod diff;
pub mod split;
pub mod stat;
