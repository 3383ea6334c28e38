/// Result-log parsing
///
/// This module parses one result log's JSON body into failure records. A log
/// that contains the missing-summary sentinel anywhere in its text yields a
/// single `missing_log` record instead of being parsed.
use crate::types::{Category, ConfigVector, FailureRecord, LogKind, MISSING_LOG};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Marker a CI step writes into its result log when it could not produce a
/// summary at all. Checked as a substring, before any JSON parsing.
pub const SUMMARY_MISSING: &str = "__SUMMARY_MISSING__";

/// Placeholder test name for a flaky testapp whose log names no individual
/// flaky test (the run crashed or timed out instead).
pub const CRASH_TIMEOUT: &str = "CRASH/TIMEOUT";

/// Body of a `build-results-*.log.json` file.
///
/// Only the error map matters for builds; the per-testapp payloads carry raw
/// log excerpts the summary does not use.
#[derive(Debug, Deserialize)]
pub struct BuildLog {
    pub errors: BTreeMap<String, serde_json::Value>,
}

/// Body of a `test-results-*.log.json` file.
#[derive(Debug, Deserialize)]
pub struct TestLog {
    pub errors: BTreeMap<String, serde_json::Value>,
    pub failures: BTreeMap<String, FailureDetail>,
    pub flakiness: BTreeMap<String, FlakinessDetail>,
}

/// Per-testapp failure detail: the individual tests that failed.
#[derive(Debug, Default, Deserialize)]
pub struct FailureDetail {
    #[serde(default)]
    pub failed_tests: BTreeMap<String, serde_json::Value>,
}

/// Per-testapp flakiness detail: the individual tests that flaked.
#[derive(Debug, Default, Deserialize)]
pub struct FlakinessDetail {
    #[serde(default)]
    pub flaky_tests: BTreeMap<String, serde_json::Value>,
}

/// Extract the failure records carried by one log file's text.
pub fn extract_records(
    kind: LogKind,
    config: &ConfigVector,
    text: &str,
) -> Result<Vec<FailureRecord>, String> {
    if text.contains(SUMMARY_MISSING) {
        let category = match kind {
            LogKind::Build => Category::BuildError,
            LogKind::Test => Category::TestError,
        };
        return Ok(vec![record(MISSING_LOG, category, config, None)]);
    }

    match kind {
        LogKind::Build => {
            let log: BuildLog = serde_json::from_str(text)
                .map_err(|e| format!("malformed build result log: {}", e))?;
            Ok(log
                .errors
                .keys()
                .map(|testapp| record(testapp, Category::BuildError, config, None))
                .collect())
        }
        LogKind::Test => {
            let log: TestLog = serde_json::from_str(text)
                .map_err(|e| format!("malformed test result log: {}", e))?;
            Ok(test_records(&log, config))
        }
    }
}

fn test_records(log: &TestLog, config: &ConfigVector) -> Vec<FailureRecord> {
    let mut records = Vec::new();

    for testapp in log.errors.keys() {
        records.push(record(testapp, Category::TestError, config, None));
    }

    for (testapp, detail) in &log.failures {
        if detail.failed_tests.is_empty() {
            // The testapp failed without naming tests; keep the failure
            // rather than dropping it.
            records.push(record(testapp, Category::TestFailure, config, None));
        } else {
            for test in detail.failed_tests.keys() {
                records.push(record(testapp, Category::TestFailure, config, Some(test.clone())));
            }
        }
    }

    for (testapp, detail) in &log.flakiness {
        if detail.flaky_tests.is_empty() {
            records.push(record(
                testapp,
                Category::TestFlakiness,
                config,
                Some(CRASH_TIMEOUT.to_string()),
            ));
        } else {
            for test in detail.flaky_tests.keys() {
                records.push(record(testapp, Category::TestFlakiness, config, Some(test.clone())));
            }
        }
    }

    records
}

fn record(
    testapp: &str,
    category: Category,
    config: &ConfigVector,
    test_name: Option<String>,
) -> FailureRecord {
    FailureRecord { testapp: testapp.to_string(), category, config: config.clone(), test_name }
}
