//! matrix-summary - CI result-log summarizer
//!
//! This crate condenses the per-configuration JSON result logs a CI test
//! matrix produces into one human-readable failure report: a Markdown table,
//! a plain-text log, or a single-line GitHub Actions annotation. The
//! interesting part is configuration compaction, which collapses repeated
//! per-configuration failures into labels such as `All 3 os` or
//! `2/3 os: ubuntu,windows`.

pub mod cli;
pub mod compact;
pub mod discover;
pub mod matrix;
pub mod parse;
pub mod report;
pub mod summarize;
pub mod types;
pub mod ui;

pub use summarize::summarize_logs;
pub use types::{Category, ConfigVector, LogKind, OutputMode, Summary, SummaryResults};
