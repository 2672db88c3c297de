/*
 * Lifecycle Application Layer
 *
 * Classification, enrichment (caller context, guard), pairing and rules,
 * tied together by the per-unit analyzer.
 */

mod analyzer;
mod caller_context;
mod classifier;
mod guard;
mod rules;
mod tracker;

pub use analyzer::{LifecycleAnalyzer, UnitAnalysis, UnitPhase};
pub use caller_context::{classify_method, enclosing_method, enclosing_type, CallerContextResolver};
pub use classifier::{CallClassifier, Classification};
pub use guard::{catch_types, enclosing_tries, is_guarded, EnclosingTries};
pub use rules::{CallEvent, ConnectionState, RuleState};
pub use tracker::{AcquireOutcome, PairingReport, PairingTracker};
