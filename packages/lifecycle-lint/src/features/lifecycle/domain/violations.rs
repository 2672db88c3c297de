/*
 * Lifecycle Violations
 *
 * Issues (what can be reported) and diagnostics (what was reported).
 */

use super::CallSite;
use crate::shared::models::{NodeId, Span};
use serde::{Deserialize, Serialize};

/// Lifecycle policy violation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    /// Second acquisition while the first is still live
    DuplicateAcquisition,

    /// Acquisition never released in the unit
    UnmatchedAcquisition,

    /// Resource released in several places without an exception guard
    UnguardedDuplicateRelease,

    /// Acquire/release outside the lifecycle hook the platform expects
    WrongCallerContext,

    /// Release during the save-state callback
    ReleaseDuringSaveState,
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolationKind::DuplicateAcquisition => write!(f, "Duplicate Acquisition"),
            ViolationKind::UnmatchedAcquisition => write!(f, "Unmatched Acquisition"),
            ViolationKind::UnguardedDuplicateRelease => write!(f, "Unguarded Duplicate Release"),
            ViolationKind::WrongCallerContext => write!(f, "Wrong Caller Context"),
            ViolationKind::ReleaseDuringSaveState => write!(f, "Release During Save State"),
        }
    }
}

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

/// Issue category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Performance,
}

/// A reportable issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub id: &'static str,
    pub brief_description: &'static str,
    pub explanation: &'static str,
    pub category: Category,
    /// 1 (lowest) to 10 (highest)
    pub priority: u8,
    pub severity: Severity,
    pub more_info: Option<&'static str>,
}

/// A reported lifecycle violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub issue_id: &'static str,
    pub kind: ViolationKind,
    pub severity: Severity,
    pub message: String,

    /// Location of the anchor call site
    pub span: Span,

    /// Anchor call node
    pub node: NodeId,
}

impl Diagnostic {
    /// Create a diagnostic anchored at `call`
    pub fn at(issue: &Issue, kind: ViolationKind, call: &CallSite, message: impl Into<String>) -> Self {
        Self {
            issue_id: issue.id,
            kind,
            severity: issue.severity,
            message: message.into(),
            span: call.span,
            node: call.node,
        }
    }

    /// Format for display
    pub fn format_message(&self) -> String {
        format!(
            "Line {}: {} - {} [{}]",
            self.span.start_line, self.kind, self.message, self.issue_id
        )
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_message())
    }
}
