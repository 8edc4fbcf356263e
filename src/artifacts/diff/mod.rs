//! Text diff engine
//!
//! Data flows strictly downward through these modules:
//!
//! - `token`: Normalization and splitting into line/word/char tokens
//! - `lcs`: Longest-common-subsequence alignment with the complexity guard
//! - `chunk`: Run-length compaction of the edit script into chunks
//! - `patch`: Unified-diff hunks with bounded context
//! - `alignment`: Two-column rows and unchanged-run collapsing
//! - `stats`: Added/removed/unchanged token totals
//!
//! `engine::diff` runs the whole pipeline for one pair of texts; `config`
//! holds the knobs it takes and `edit` the per-token operations shared by
//! all stages.

pub mod alignment;
pub mod chunk;
pub mod config;
pub mod edit;
pub mod engine;
pub mod lcs;
pub mod patch;
pub mod stats;
pub mod token;
