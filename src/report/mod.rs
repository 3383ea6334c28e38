//! Report generation module - rendering of aggregated results.
//!
//! This module handles:
//! - Markdown table output with disclosure widgets for long cells
//! - Plain-text table output with width-aware column justification
//! - Plain-text log output
//! - GitHub Actions log annotation output
//!
//! # Module Organization
//!
//! - `table` - The parametrized table engine (markdown and text variants)
//! - `log` - Log-style output (plain and GitHub-annotated)

mod log;
mod table;

use crate::types::{OutputMode, SummaryResults};

pub use self::log::{github_log, plain_log, LOG_HEADER};
pub use self::table::{markdown_table, text_table, LIST_MAX};

/// Render aggregated results in the requested output mode.
pub fn render(results: &SummaryResults, mode: OutputMode) -> String {
    match mode {
        OutputMode::Markdown => markdown_table(results),
        OutputMode::GithubLog => github_log(results),
        OutputMode::Log => plain_log(results),
    }
}
