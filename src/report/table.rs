/// Table output
///
/// The parametrized engine behind the Markdown report: one row per testapp,
/// one cell collecting that testapp's labels. The Markdown variant uses
/// `&nbsp;` spacing and `<br/>` separators to keep GitHub from re-wrapping
/// cells; the text variant justifies both columns by display width instead.
use crate::types::SummaryResults;
use std::collections::BTreeMap;
use unicode_width::UnicodeWidthStr;

pub const TESTAPPS_HEADER: &str = "Failures";
pub const CONFIGS_HEADER: &str = "Configs";

/// Most entries a cell shows inline before collapsing into a disclosure
/// widget.
pub const LIST_MAX: usize = 3;

struct TableParams {
    space_char: &'static str,
    list_separator: &'static str,
    testapps_width: usize,
    configs_width: usize,
}

const MARKDOWN: TableParams = TableParams {
    space_char: "&nbsp;",
    list_separator: "<br/>",
    testapps_width: 0,
    configs_width: 0,
};

const UNPADDED_TEXT: TableParams = TableParams {
    space_char: " ",
    list_separator: ", ",
    testapps_width: 0,
    configs_width: 0,
};

/// Render results as a Markdown table.
pub fn markdown_table(results: &SummaryResults) -> String {
    render_table(results, &MARKDOWN)
}

/// Render results as a plain-text table, both columns justified to their
/// widest content.
pub fn text_table(results: &SummaryResults) -> String {
    let rows = results.ordered();
    let testapps_width = rows
        .iter()
        .map(|(testapp, _)| testapp.width())
        .chain([TESTAPPS_HEADER.width()])
        .max()
        .unwrap_or(0);
    let configs_width = rows
        .iter()
        .map(|(_, labels)| format_result(labels, &UNPADDED_TEXT).width())
        .chain([CONFIGS_HEADER.width()])
        .max()
        .unwrap_or(0);
    render_table(
        results,
        &TableParams { testapps_width, configs_width, ..UNPADDED_TEXT },
    )
}

fn render_table(results: &SummaryResults, params: &TableParams) -> String {
    let headers = [
        substitute_word_spaces(&ljust(TESTAPPS_HEADER, params.testapps_width), params.space_char),
        substitute_word_spaces(&ljust(CONFIGS_HEADER, params.configs_width), params.space_char),
    ];
    let mut lines = vec![
        format!("| {} | {} |", headers[0], headers[1]),
        format!("|-{}-|-{}-|", dash_fill(&headers[0]), dash_fill(&headers[1])),
    ];
    for (testapp, labels) in results.ordered() {
        lines.push(format!(
            "| {} | {} |",
            substitute_word_spaces(&ljust(testapp, params.testapps_width), params.space_char),
            format_result(labels, params)
        ));
    }
    lines.join("\n")
}

/// Format one testapp's cell: its labels sorted and concatenated, each
/// label's failed tests tucked into a disclosure widget, and the whole cell
/// collapsed into one widget when it holds more than `LIST_MAX` labels.
fn format_result(labels: &BTreeMap<String, Vec<String>>, params: &TableParams) -> String {
    let mut entries: Vec<String> = Vec::with_capacity(labels.len());
    for (label, tests) in labels {
        if tests.is_empty() {
            entries.push(format!("{}{}", label, params.list_separator));
        } else {
            let indented: Vec<String> = tests
                .iter()
                .map(|test| format!("{}{}{}", params.space_char, params.space_char, test))
                .collect();
            entries.push(format!(
                "{}<details><summary>({} failed tests)</summary>{}</details>",
                label,
                tests.len(),
                indented.join(params.list_separator)
            ));
        }
    }
    entries.sort();

    if entries.len() > LIST_MAX {
        format!(
            "<details><summary>({} items)</summary>{}</details>",
            entries.len(),
            entries.concat()
        )
    } else {
        ljust(&entries.concat(), params.configs_width)
    }
}

fn ljust(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn dash_fill(header: &str) -> String {
    header.chars().map(|c| if c == '|' { '|' } else { '-' }).collect()
}

/// Replace spaces between words with the configured space character, leaving
/// justification padding alone.
fn substitute_word_spaces(text: &str, space_char: &str) -> String {
    if space_char == " " {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        let between_words = c == ' '
            && i > 0
            && is_word_char(chars[i - 1])
            && chars.get(i + 1).copied().map(is_word_char).unwrap_or(false);
        if between_words {
            out.push_str(space_char);
        } else {
            out.push(c);
        }
    }
    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
