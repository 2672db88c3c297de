/*
 * Lifecycle Rules
 *
 * One rule per resource kind. Each rule is a function of
 * (enriched call event, rule state) -> diagnostics + state update,
 * plus an end-of-unit pass over the accumulated state.
 *
 * - Subscription: keyed pairing (PairingTracker)
 * - Connection: unkeyed flags (ConnectionState)
 */

mod connection;
mod subscription;

pub use connection::ConnectionState;

use super::tracker::PairingTracker;
use crate::features::lifecycle::domain::{CallRole, CallSite, CallerContext, ResourceKind};
use crate::features::lifecycle::ports::DiagnosticSink;

/// A classified call site enriched with its caller context and guard status
#[derive(Debug, Clone, Copy)]
pub struct CallEvent<'a> {
    pub call: &'a CallSite,
    pub role: CallRole,
    pub context: &'a CallerContext,

    /// Only meaningful for releases of APIs with guard exceptions
    pub guarded: bool,
}

/// Per-unit state of one rule
#[derive(Debug)]
pub enum RuleState {
    Subscription(PairingTracker),
    Connection(ConnectionState),
}

impl RuleState {
    pub fn new(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Subscription => RuleState::Subscription(PairingTracker::new()),
            ResourceKind::Connection => RuleState::Connection(ConnectionState::default()),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            RuleState::Subscription(_) => ResourceKind::Subscription,
            RuleState::Connection(_) => ResourceKind::Connection,
        }
    }

    /// Inline pass: update state, report immediate violations
    pub fn on_event<S: DiagnosticSink + ?Sized>(&mut self, event: &CallEvent<'_>, sink: &mut S) {
        match self {
            RuleState::Subscription(tracker) => subscription::on_event(tracker, event, sink),
            RuleState::Connection(state) => state.on_event(event, sink),
        }
    }

    /// End-of-unit pass; leaves the state empty
    pub fn finish<S: DiagnosticSink + ?Sized>(&mut self, sink: &mut S) {
        match self {
            RuleState::Subscription(tracker) => subscription::finish(tracker, sink),
            RuleState::Connection(state) => state.finish(sink),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RuleState::Subscription(tracker) => tracker.is_empty(),
            RuleState::Connection(state) => state.is_empty(),
        }
    }
}
