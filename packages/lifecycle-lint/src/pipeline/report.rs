//! Report rendering
//!
//! Text output follows the Android lint console format:
//!
//! ```text
//! app/src/Main.java:12: Warning: Found a `registerReceiver()` ... [BroadcastReceiverLifecycle]
//! 0 errors, 1 warnings
//! ```

use super::batch::{BatchReport, FileFailure};
use super::unit::UnitReport;
use crate::errors::Result;
use crate::features::lifecycle::{Issue, IssueRegistry};
use serde::Serialize;
use std::fmt::Write as _;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonSummary {
    files: usize,
    errors: usize,
    warnings: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files: &'a [UnitReport],
    failures: &'a [FileFailure],
    summary: JsonSummary,
}

pub fn render(report: &BatchReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Json => render_json(report),
    }
}

pub fn render_text(report: &BatchReport) -> String {
    let mut out = String::new();

    for unit in &report.units {
        for diagnostic in &unit.diagnostics {
            let _ = writeln!(
                out,
                "{}:{}: {}: {} [{}]",
                unit.path,
                diagnostic.span.start_line,
                diagnostic.severity.label(),
                diagnostic.message,
                diagnostic.issue_id
            );
        }
    }
    for failure in &report.failures {
        let _ = writeln!(out, "{}: Error: {}", failure.path, failure.error);
    }

    let _ = writeln!(
        out,
        "{} errors, {} warnings",
        report.error_count(),
        report.warning_count()
    );
    out
}

pub fn render_json(report: &BatchReport) -> Result<String> {
    let json = JsonReport {
        files: &report.units,
        failures: &report.failures,
        summary: JsonSummary {
            files: report.files_linted(),
            errors: report.error_count(),
            warnings: report.warning_count(),
        },
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

/// Registered issues, for `--list-issues`
pub fn render_issue_list() -> String {
    let mut out = String::new();
    for issue in IssueRegistry::issues() {
        render_issue(&mut out, issue);
    }
    out
}

fn render_issue(out: &mut String, issue: &Issue) {
    let _ = writeln!(out, "{}", issue.id);
    let _ = writeln!(out, "  Summary: {}", issue.brief_description);
    let _ = writeln!(
        out,
        "  Priority: {} / 10, Severity: {}, Category: {:?}",
        issue.priority,
        issue.severity.label(),
        issue.category
    );
    let _ = writeln!(out, "  {}", issue.explanation);
    if let Some(url) = issue.more_info {
        let _ = writeln!(out, "  More info: {url}");
    }
    out.push('\n');
}
