/// Log-style output
///
/// Plain text for humans reading a terminal, and the same lines folded into a
/// single `::error` annotation for GitHub Actions job logs.
use crate::types::SummaryResults;

pub const LOG_HEADER: &str = "INTEGRATION TEST FAILURES";

/// Render results as a plain-text log, one block per testapp.
pub fn plain_log(results: &SummaryResults) -> String {
    log_lines(results).join("\n")
}

/// Render results as a GitHub Actions error annotation: header, rule, then
/// the plain log, folded into one line with `%0A` escapes so the workflow
/// log shows the newlines.
pub fn github_log(results: &SummaryResults) -> String {
    let mut lines = vec![
        format!("::error ::{}", LOG_HEADER),
        "—".repeat(LOG_HEADER.chars().count()),
        String::new(),
    ];
    lines.extend(log_lines(results));
    lines.join("%0A")
}

fn log_lines(results: &SummaryResults) -> Vec<String> {
    let mut lines = Vec::new();
    for (testapp, labels) in results.ordered() {
        // Blank separator before every block; the leading one is dropped below.
        lines.push(String::new());
        lines.push(format!("{}:", testapp));
        if !labels.is_empty() {
            lines.push(format!("  Errors and Failures ({}):", labels.len()));
        }
        for (label, tests) in labels {
            lines.push(format!("  - {}", label));
            if !tests.is_empty() {
                lines.push(format!("    - failed tests: {}", quoted_list(tests)));
            }
        }
    }
    if !lines.is_empty() {
        lines.remove(0);
    }
    lines
}

fn quoted_list(tests: &[String]) -> String {
    format!("['{}']", tests.join("', '"))
}
