/// Core data structures for result summaries
///
/// This module defines the primary data structures used throughout
/// matrix-summary for representing result logs, failure records, and the
/// aggregated summary handed to the renderers.
use std::collections::BTreeMap;

/// Pseudo test-application name under which missing-summary sentinels are
/// reported. Always rendered first.
pub const MISSING_LOG: &str = "missing_log";

/// Which CI stage produced a result log
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogKind {
    Build,
    Test,
}

impl LogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogKind::Build => "build",
            LogKind::Test => "test",
        }
    }
}

/// Failure category: the CI stage plus the severity reported for it
///
/// This is the key under which records aggregate; each category renders as a
/// fixed `[STAGE] [SEVERITY]` label prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    BuildError,
    TestError,
    TestFailure,
    TestFlakiness,
}

impl Category {
    /// The `[STAGE] [SEVERITY]` prefix of every label in this category.
    pub fn label_prefix(&self) -> &'static str {
        match self {
            Category::BuildError => "[BUILD] [ERROR]",
            Category::TestError => "[TEST] [ERROR]",
            Category::TestFailure => "[TEST] [FAILURE]",
            Category::TestFlakiness => "[TEST] [FLAKINESS]",
        }
    }

    /// Which log kind's configuration universe this category compacts against.
    pub fn log_kind(&self) -> LogKind {
        match self {
            Category::BuildError => LogKind::Build,
            _ => LogKind::Test,
        }
    }

    /// Flaky results are reported but do not flip the overall success flag.
    pub fn is_flakiness(&self) -> bool {
        matches!(self, Category::TestFlakiness)
    }
}

/// One CI matrix cell, as encoded in a result-log filename
///
/// Values are positionally aligned to the axis schema for the log kind the
/// file belongs to (see the `matrix` module); `discover` validates the length
/// at extraction time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigVector {
    pub values: Vec<String>,
}

impl ConfigVector {
    pub fn new(values: Vec<String>) -> Self {
        ConfigVector { values }
    }

    /// The value at one axis position.
    pub fn value(&self, axis_index: usize) -> &str {
        &self.values[axis_index]
    }
}

/// One failure observation extracted from one result log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    /// Test application the log attributes the result to (or `missing_log`).
    pub testapp: String,
    pub category: Category,
    /// The matrix cell of the file the observation came from.
    pub config: ConfigVector,
    /// Individual failed or flaky test, where the log names one.
    pub test_name: Option<String>,
}

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Plain text log (the default).
    Log,
    /// Markdown table with disclosure widgets for long cells.
    Markdown,
    /// Single-line GitHub Actions error annotation.
    GithubLog,
}

/// Aggregated results ready for rendering
///
/// Per test application, an ordered mapping from a rendered category+config
/// label to the (possibly empty) sorted list of failed-test names associated
/// with that label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryResults {
    pub apps: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl SummaryResults {
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// Rendering order: the `missing_log` row first, then testapps sorted.
    pub fn ordered(&self) -> Vec<(&String, &BTreeMap<String, Vec<String>>)> {
        let mut rows = Vec::with_capacity(self.apps.len());
        if let Some(missing) = self.apps.get_key_value(MISSING_LOG) {
            rows.push(missing);
        }
        rows.extend(self.apps.iter().filter(|(app, _)| app.as_str() != MISSING_LOG));
        rows
    }
}

/// Outcome of one summarize run
///
/// The `(success, text)` pair surfaced to programmatic callers; the binary
/// prints `text` when present and always exits 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// False when any build error, test error, test failure, or missing log
    /// was seen. Flakiness alone leaves this true.
    pub success: bool,
    /// Rendered summary, or None when there is nothing to report.
    pub text: Option<String>,
}
