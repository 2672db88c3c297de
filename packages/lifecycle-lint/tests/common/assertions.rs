//! Custom assertions for diagnostics

use lifecycle_lint::features::lifecycle::{Diagnostic, ViolationKind};
use lifecycle_lint::pipeline::{lint_source, Linter, UnitReport};

/// 1-indexed line of the `occurrence`-th (0-based) line containing `needle`
///
/// `needle` must start a word, so `registerReceiver(` does not match
/// `unregisterReceiver(`.
pub fn line_of(source: &str, needle: &str, occurrence: usize) -> u32 {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| starts_word(line, needle))
        .nth(occurrence)
        .map(|(index, _)| index as u32 + 1)
        .unwrap_or_else(|| panic!("`{needle}` occurrence {occurrence} not found"))
}

fn starts_word(line: &str, needle: &str) -> bool {
    line.match_indices(needle).any(|(at, _)| {
        !line[..at]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
    })
}

/// Lint a fixture with the default configuration
pub fn lint_fixture(file_name: &str, source: &str) -> UnitReport {
    lint_source(source, file_name, &Linter::default())
        .unwrap_or_else(|e| panic!("{file_name} failed to lint: {e}"))
}

/// (line, kind) pairs in report order
pub fn kinds_by_line(diagnostics: &[Diagnostic]) -> Vec<(u32, ViolationKind)> {
    diagnostics
        .iter()
        .map(|d| (d.span.start_line, d.kind))
        .collect()
}

/// Assert the report carries no diagnostics
pub fn assert_clean(report: &UnitReport) {
    assert!(
        report.diagnostics.is_empty(),
        "Expected no diagnostics for {}, got: {:#?}",
        report.path,
        report
            .diagnostics
            .iter()
            .map(Diagnostic::format_message)
            .collect::<Vec<_>>()
    );
}

/// Assert every diagnostic belongs to `issue_id`
pub fn assert_issue(diagnostics: &[Diagnostic], issue_id: &str) {
    for diagnostic in diagnostics {
        assert_eq!(
            diagnostic.issue_id, issue_id,
            "Unexpected issue for: {}",
            diagnostic.message
        );
    }
}
