/*
 * Lifecycle Analyzer
 *
 * Entry point of the core. A `LifecycleAnalyzer` holds the immutable
 * configuration (enabled resource kinds) and is shared freely; every
 * compilation unit gets its own `UnitAnalysis` holding all mutable state.
 *
 * # Protocol
 * ```text
 * let mut unit = analyzer.begin_unit(&tree, &resolver);
 * for call in calls_in_dfs_order {
 *     unit.on_call_site(&call, &mut sink);   // inline diagnostics
 * }
 * unit.finish(&mut sink);                    // end-of-unit diagnostics
 * ```
 *
 * # State machine (per unit)
 * Idle -> Accumulating -> Finalizing -> Idle
 *
 * A unit dropped without `finish()` is discarded silently; nothing it
 * recorded can reach another unit.
 */

use super::caller_context::CallerContextResolver;
use super::classifier::CallClassifier;
use super::guard::is_guarded;
use super::rules::{CallEvent, RuleState};
use crate::features::lifecycle::domain::{CallRole, CallSite, Diagnostic, ResourceKind};
use crate::features::lifecycle::infrastructure::resource_api;
use crate::features::lifecycle::ports::{DiagnosticSink, TreeWalker, TypeResolver};
use tracing::{debug, trace};

/// Phase of a unit's analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitPhase {
    Idle,
    Accumulating,
    Finalizing,
}

/// Resource-lifecycle analyzer (stateless across units)
#[derive(Debug, Clone, Default)]
pub struct LifecycleAnalyzer {
    classifier: CallClassifier,
}

impl LifecycleAnalyzer {
    /// Analyzer with every resource kind enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer restricted to `kinds`
    pub fn with_kinds(kinds: impl IntoIterator<Item = ResourceKind>) -> Self {
        Self {
            classifier: CallClassifier::new(kinds),
        }
    }

    /// Method names a host must report call sites for
    pub fn applicable_method_names(&self) -> Vec<&'static str> {
        self.classifier.applicable_method_names()
    }

    pub fn is_applicable(&self, method_name: &str) -> bool {
        self.classifier.is_applicable(method_name)
    }

    pub fn kinds(&self) -> impl Iterator<Item = ResourceKind> + '_ {
        self.classifier.kinds()
    }

    /// Start analyzing one compilation unit
    pub fn begin_unit<'u, W, R>(&'u self, tree: &'u W, resolver: &'u R) -> UnitAnalysis<'u, W, R>
    where
        W: TreeWalker + ?Sized,
        R: TypeResolver + ?Sized,
    {
        UnitAnalysis {
            classifier: &self.classifier,
            tree,
            resolver,
            contexts: CallerContextResolver::new(),
            rules: self.classifier.kinds().map(RuleState::new).collect(),
            phase: UnitPhase::Idle,
        }
    }

    /// Analyze a whole unit given its call sites in depth-first order
    pub fn analyze_unit<'c, W, R, I>(&self, tree: &W, resolver: &R, calls: I) -> Vec<Diagnostic>
    where
        W: TreeWalker + ?Sized,
        R: TypeResolver + ?Sized,
        I: IntoIterator<Item = &'c CallSite>,
    {
        let mut diagnostics = Vec::new();
        let mut unit = self.begin_unit(tree, resolver);
        for call in calls {
            unit.on_call_site(call, &mut diagnostics);
        }
        unit.finish(&mut diagnostics);
        diagnostics
    }
}

/// Mutable analysis state of a single compilation unit
pub struct UnitAnalysis<'u, W: TreeWalker + ?Sized, R: TypeResolver + ?Sized> {
    classifier: &'u CallClassifier,
    tree: &'u W,
    resolver: &'u R,
    contexts: CallerContextResolver,
    rules: Vec<RuleState>,
    phase: UnitPhase,
}

impl<'u, W, R> UnitAnalysis<'u, W, R>
where
    W: TreeWalker + ?Sized,
    R: TypeResolver + ?Sized,
{
    pub fn phase(&self) -> UnitPhase {
        self.phase
    }

    /// Process one call site; inline diagnostics go to `sink`
    pub fn on_call_site<S: DiagnosticSink + ?Sized>(&mut self, call: &CallSite, sink: &mut S) {
        self.phase = UnitPhase::Accumulating;

        if !self.classifier.is_applicable(&call.method_name) {
            return;
        }

        let Some(classification) = self.classifier.classify(call, self.resolver) else {
            return;
        };

        let Some(rule) = self.rules.iter_mut().find(|rule| rule.kind() == classification.kind) else {
            return;
        };

        let context = self.contexts.context_of(self.tree, self.resolver, call.node);
        let guarded = classification.role == CallRole::Release
            && is_guarded(self.tree, self.resolver, call.node, resource_api(classification.kind));

        trace!(
            "{}() at {}: {} {:?} in {:?} {} (guarded: {})",
            call.method_name,
            call.span,
            classification.kind,
            classification.role,
            context.component,
            context.method_name,
            guarded
        );

        let event = CallEvent {
            call,
            role: classification.role,
            context: &context,
            guarded,
        };
        rule.on_event(&event, sink);
    }

    /// Emit end-of-unit diagnostics and discard the unit's state
    pub fn finish<S: DiagnosticSink + ?Sized>(mut self, sink: &mut S) {
        self.phase = UnitPhase::Finalizing;
        for rule in &mut self.rules {
            rule.finish(sink);
        }
        self.contexts.clear();
        self.phase = UnitPhase::Idle;
    }
}

impl<W, R> Drop for UnitAnalysis<'_, W, R>
where
    W: TreeWalker + ?Sized,
    R: TypeResolver + ?Sized,
{
    fn drop(&mut self) {
        if self.phase == UnitPhase::Accumulating {
            debug!("unit dropped before finish(); discarding its state");
        }
        self.rules.clear();
        self.contexts.clear();
    }
}
