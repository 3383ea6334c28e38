/// Summary assembly
///
/// This module handles:
/// - Reading every discovered result log and extracting its failure records
/// - Grouping records per testapp and category
/// - Compacting each group's configurations against the exercised universe
/// - Rendering the selected output format
use crate::compact;
use crate::discover;
use crate::parse;
use crate::report;
use crate::types::{
    Category, ConfigVector, FailureRecord, LogKind, OutputMode, Summary, SummaryResults,
};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// Summarize every result log in `dir`.
///
/// Returns the overall success flag together with the rendered summary text
/// when there is anything to report. Flakiness is reported in the text but
/// leaves the success flag set.
pub fn summarize_logs(dir: &Path, mode: OutputMode) -> Result<Summary, String> {
    let files = discover::find_log_files(dir)?;

    let mut build_universe = Vec::new();
    let mut test_universe = Vec::new();
    let mut records = Vec::new();
    for file in &files {
        match file.kind {
            LogKind::Build => build_universe.push(file.config.clone()),
            LogKind::Test => test_universe.push(file.config.clone()),
        }
        let text = fs::read_to_string(&file.path)
            .map_err(|e| format!("Failed to read {}: {}", file.path.display(), e))?;
        let extracted = parse::extract_records(file.kind, &file.config, &text)
            .map_err(|e| format!("Failed to parse {}: {}", file.path.display(), e))?;
        debug!("{}: {} record(s)", file.path.display(), extracted.len());
        records.extend(extracted);
    }

    let success = records.iter().all(|record| record.category.is_flakiness());
    if records.is_empty() {
        debug!("No failures and no flakiness, nothing to report");
        return Ok(Summary { success, text: None });
    }

    let results = aggregate(&records, &build_universe, &test_universe);
    let text = report::render(&results, mode);
    Ok(Summary { success, text: Some(text) })
}

/// Group records per testapp and category, compact each group's configs, and
/// attach the named tests collected for the group.
fn aggregate(
    records: &[FailureRecord],
    build_universe: &[ConfigVector],
    test_universe: &[ConfigVector],
) -> SummaryResults {
    let mut grouped: BTreeMap<(String, Category), (Vec<ConfigVector>, BTreeSet<String>)> =
        BTreeMap::new();
    for record in records {
        let entry = grouped.entry((record.testapp.clone(), record.category)).or_default();
        // Per-test records repeat their file's config.
        if !entry.0.contains(&record.config) {
            entry.0.push(record.config.clone());
        }
        if let Some(test) = &record.test_name {
            entry.1.insert(test.clone());
        }
    }

    let mut results = SummaryResults::default();
    for ((testapp, category), (configs, tests)) in grouped {
        let kind = category.log_kind();
        let universe = match kind {
            LogKind::Build => build_universe,
            LogKind::Test => test_universe,
        };
        let axis_groups = compact::compact_configs(kind, &configs, universe);
        let label = format!("{} {}", category.label_prefix(), compact::flat_label(&axis_groups));
        results.apps.entry(testapp).or_default().insert(label, tests.into_iter().collect());
    }
    results
}

#[cfg(test)]
#[path = "summarize_test.rs"]
mod summarize_test;
