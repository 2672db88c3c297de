/*
 * lifecycle-lint - Resource-lifecycle consistency analyzer
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : NodeId, SyntaxKind, Span, TypeRef, TreeWalker
 * - features/    : Vertical slices (parsing → type_resolution → lifecycle)
 * - pipeline/    : Unit and batch linting, report rendering
 * - config/      : YAML configuration
 *
 * Units are analyzed independently; batches run on the rayon pool.
 */

// Crate-level lint configuration
#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::upper_case_acronyms)] // API naming

/// Shared models and ports
pub mod shared;

/// Feature modules (parsing, type resolution, lifecycle analysis)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration
pub mod config;

/// Error types
pub mod errors;

pub use config::LintConfig;
pub use errors::{LintError, Result};
pub use features::lifecycle::{
    Diagnostic, IssueRegistry, LifecycleAnalyzer, ResourceKind, UnitAnalysis, ViolationKind,
};
pub use pipeline::{lint_paths, lint_source, BatchReport, Linter, ReportFormat, UnitReport};
