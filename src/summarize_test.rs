/// Tests for the summarize module
#[cfg(test)]
mod tests {
    use crate::summarize::{aggregate, summarize_logs};
    use crate::types::{Category, ConfigVector, FailureRecord, OutputMode, MISSING_LOG};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const CLEAN_BUILD_LOG: &str = r#"{"errors": {}}"#;
    const CLEAN_TEST_LOG: &str = r#"{"errors": {}, "failures": {}, "flakiness": {}}"#;

    fn write_log(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).expect("Should write fixture log");
    }

    fn cfg(values: &[&str]) -> ConfigVector {
        ConfigVector::new(values.iter().map(|v| v.to_string()).collect())
    }

    fn record(
        testapp: &str,
        category: Category,
        config: ConfigVector,
        test: Option<&str>,
    ) -> FailureRecord {
        FailureRecord {
            testapp: testapp.to_string(),
            category,
            config,
            test_name: test.map(str::to_string),
        }
    }

    #[test]
    fn test_clean_run_reports_success_without_text() {
        let dir = TempDir::new().expect("Should create temp dir");
        write_log(dir.path(), "build-results-ubuntu-openssl.log.json", CLEAN_BUILD_LOG);
        write_log(
            dir.path(),
            "test-results-android-ubuntu-emulator_min.log.json",
            CLEAN_TEST_LOG,
        );

        let summary = summarize_logs(dir.path(), OutputMode::Log).unwrap();
        assert!(summary.success);
        assert_eq!(summary.text, None);
    }

    #[test]
    fn test_empty_directory_reports_success() {
        let dir = TempDir::new().expect("Should create temp dir");
        let summary = summarize_logs(dir.path(), OutputMode::Log).unwrap();
        assert!(summary.success);
        assert_eq!(summary.text, None);
    }

    #[test]
    fn test_single_build_error_names_testapp_and_category() {
        let dir = TempDir::new().expect("Should create temp dir");
        write_log(
            dir.path(),
            "build-results-windows-openssl.log.json",
            r#"{"errors": {"messaging": "exit 1"}}"#,
        );

        let summary = summarize_logs(dir.path(), OutputMode::Log).unwrap();
        assert!(!summary.success);
        assert_eq!(
            summary.text.as_deref(),
            Some("messaging:\n  Errors and Failures (1):\n  - [BUILD] [ERROR] [windows] [openssl]")
        );
    }

    #[test]
    fn test_failure_on_every_os_collapses_to_all() {
        let dir = TempDir::new().expect("Should create temp dir");
        for os in ["ubuntu", "macos", "windows"] {
            write_log(
                dir.path(),
                &format!("build-results-{}-openssl.log.json", os),
                r#"{"errors": {"auth": "exit 1"}}"#,
            );
        }

        let summary = summarize_logs(dir.path(), OutputMode::Log).unwrap();
        let text = summary.text.expect("Should produce summary text");
        assert!(text.contains("[BUILD] [ERROR] [All 3 os] [openssl]"), "got: {}", text);
    }

    #[test]
    fn test_failure_on_subset_of_os_lists_counted_values() {
        let dir = TempDir::new().expect("Should create temp dir");
        write_log(dir.path(), "build-results-macos-openssl.log.json", CLEAN_BUILD_LOG);
        for os in ["windows", "ubuntu"] {
            write_log(
                dir.path(),
                &format!("build-results-{}-openssl.log.json", os),
                r#"{"errors": {"auth": "exit 1"}}"#,
            );
        }

        let summary = summarize_logs(dir.path(), OutputMode::Log).unwrap();
        let text = summary.text.expect("Should produce summary text");
        assert!(
            text.contains("[BUILD] [ERROR] [2/3 os: ubuntu,windows] [openssl]"),
            "got: {}",
            text
        );
    }

    #[test]
    fn test_flakiness_alone_keeps_success_with_text() {
        let dir = TempDir::new().expect("Should create temp dir");
        write_log(
            dir.path(),
            "test-results-ios-macos-simulator_min.log.json",
            r#"{"errors": {}, "failures": {}, "flakiness": {"firestore": {"flaky_tests": {"TestListen": {}}}}}"#,
        );

        let summary = summarize_logs(dir.path(), OutputMode::Log).unwrap();
        assert!(summary.success);
        assert_eq!(
            summary.text.as_deref(),
            Some(
                "firestore:\n  Errors and Failures (1):\n  \
                 - [TEST] [FLAKINESS] [ios] [macos] [simulator_min]\n    \
                 - failed tests: ['TestListen']"
            )
        );
    }

    #[test]
    fn test_missing_summary_sentinel_renders_first_and_fails_run() {
        let dir = TempDir::new().expect("Should create temp dir");
        write_log(dir.path(), "build-results-windows-boringssl.log.json", "__SUMMARY_MISSING__");
        write_log(
            dir.path(),
            "build-results-windows-openssl.log.json",
            r#"{"errors": {"admob": "exit 1"}}"#,
        );

        let summary = summarize_logs(dir.path(), OutputMode::Log).unwrap();
        assert!(!summary.success);
        let text = summary.text.expect("Should produce summary text");
        assert!(text.starts_with(&format!("{}:", MISSING_LOG)), "got: {}", text);
        assert!(text.contains("admob:"), "got: {}", text);
    }

    #[test]
    fn test_malformed_log_is_fatal() {
        let dir = TempDir::new().expect("Should create temp dir");
        write_log(dir.path(), "build-results-ubuntu-openssl.log.json", "not json at all");

        let err = summarize_logs(dir.path(), OutputMode::Log).unwrap_err();
        assert!(err.contains("build-results-ubuntu-openssl.log.json"), "got: {}", err);
    }

    #[test]
    fn test_aggregate_merges_configs_and_collects_tests() {
        let min = cfg(&["ios", "macos", "simulator_min"]);
        let target = cfg(&["ios", "macos", "simulator_target"]);
        let records = vec![
            record("functions", Category::TestFailure, min.clone(), Some("TestSignIn")),
            record("functions", Category::TestFailure, min.clone(), Some("TestCall")),
            record("functions", Category::TestFailure, target.clone(), Some("TestSignIn")),
        ];
        let universe = vec![min, target];

        let results = aggregate(&records, &[], &universe);
        let labels = &results.apps["functions"];
        assert_eq!(labels.len(), 1);
        let (label, tests) = labels.iter().next().unwrap();
        assert_eq!(label, "[TEST] [FAILURE] [ios] [macos] [All 2 Test Device(s)]");
        assert_eq!(tests, &vec!["TestCall".to_string(), "TestSignIn".to_string()]);
    }

    #[test]
    fn test_aggregate_keeps_categories_separate() {
        let build = cfg(&["windows", "openssl"]);
        let test = cfg(&["android", "ubuntu", "emulator_min"]);
        let records = vec![
            record("messaging", Category::BuildError, build.clone(), None),
            record("messaging", Category::TestFailure, test.clone(), None),
        ];

        let results = aggregate(&records, &[build], &[test]);
        let labels = &results.apps["messaging"];
        assert_eq!(labels.len(), 2);
        let rendered: Vec<&str> = labels.keys().map(String::as_str).collect();
        assert_eq!(
            rendered,
            vec![
                "[BUILD] [ERROR] [windows] [openssl]",
                "[TEST] [FAILURE] [android] [ubuntu] [emulator_min]",
            ]
        );
    }
}
