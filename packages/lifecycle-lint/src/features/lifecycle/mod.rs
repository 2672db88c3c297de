/*
 * Resource Lifecycle Analysis
 *
 * Detects misuse of stateful platform resources within one compilation unit:
 * - Acquisitions never released (receiver registered, never unregistered)
 * - Duplicate acquisitions of a live resource
 * - Releases repeated without an exception guard
 * - Acquire/release outside the expected lifecycle callback
 *
 * Architecture:
 * - Domain: CallSite, ResourceApi, CallerContext, Diagnostic
 * - Application: classifier, caller context, guard detector, pairing
 *   tracker, rules, LifecycleAnalyzer / UnitAnalysis
 * - Infrastructure: built-in resource APIs, issue registry
 * - Ports: TreeWalker, TypeResolver, DiagnosticSink
 *
 * The analysis is syntactic: bindings are identified by the text of the
 * first argument, and no branch reachability is computed.
 */

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{
    BindingKey, CallRole, CallSite, CallerContext, Category, ComponentKind, Diagnostic, Issue,
    LifecycleHook, ResourceApi, ResourceKind, Severity, ViolationKind,
};

pub use application::{AcquireOutcome, LifecycleAnalyzer, PairingTracker, UnitAnalysis, UnitPhase};

pub use infrastructure::IssueRegistry;

pub use ports::{DiagnosticSink, TypeResolver};
