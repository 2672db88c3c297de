//! Subscription pairing rule (broadcast receivers)
//!
//! Inline: duplicate registration, unregistration during save-state.
//! End of unit: registrations never unregistered, unregistrations repeated
//! without a guard.

use super::CallEvent;
use crate::features::lifecycle::application::tracker::{AcquireOutcome, PairingTracker};
use crate::features::lifecycle::domain::{CallRole, CallSite, Diagnostic, LifecycleHook, ViolationKind};
use crate::features::lifecycle::infrastructure::{BROADCAST_RECEIVER, BROADCAST_RECEIVER_ISSUE};
use crate::features::lifecycle::ports::DiagnosticSink;
use tracing::debug;

pub(super) fn on_event<S>(tracker: &mut PairingTracker, event: &CallEvent<'_>, sink: &mut S)
where
    S: DiagnosticSink + ?Sized,
{
    let call = event.call;

    if event.role == CallRole::Release && event.context.is_in(LifecycleHook::SaveInstanceState) {
        sink.report(Diagnostic::at(
            &BROADCAST_RECEIVER_ISSUE,
            ViolationKind::ReleaseDuringSaveState,
            call,
            format!(
                "`{}()` should not be called during `{}`",
                BROADCAST_RECEIVER.release_name(),
                LifecycleHook::SaveInstanceState
            ),
        ));
    }

    let Some(key) = call.binding_key() else {
        debug!("{}() at {} has no receiver argument, skipping", call.method_name, call.span);
        return;
    };

    match event.role {
        CallRole::Acquire => {
            if let AcquireOutcome::Duplicate { first } = tracker.record_acquire(key.clone(), call) {
                sink.report(Diagnostic::at(
                    &BROADCAST_RECEIVER_ISSUE,
                    ViolationKind::DuplicateAcquisition,
                    call,
                    format!(
                        "`{}` is registered again without being unregistered (first registered at line {})",
                        key, first.span.start_line
                    ),
                ));
            }
        }
        CallRole::Release => tracker.record_release(key, call, event.guarded),
    }
}

pub(super) fn finish<S>(tracker: &mut PairingTracker, sink: &mut S)
where
    S: DiagnosticSink + ?Sized,
{
    let report = tracker.finish();

    for call in &report.unmatched_acquisitions {
        sink.report(Diagnostic::at(
            &BROADCAST_RECEIVER_ISSUE,
            ViolationKind::UnmatchedAcquisition,
            call,
            format!(
                "Found a `{}()` for `{}` but no matching `{}()` in the class",
                BROADCAST_RECEIVER.acquire_name(),
                key_text(call),
                BROADCAST_RECEIVER.release_name()
            ),
        ));
    }

    for call in &report.unguarded_duplicate_releases {
        sink.report(Diagnostic::at(
            &BROADCAST_RECEIVER_ISSUE,
            ViolationKind::UnguardedDuplicateRelease,
            call,
            format!(
                "`{}` is unregistered in more than one place; surround this `{}()` with a try/catch for `IllegalArgumentException`",
                key_text(call),
                BROADCAST_RECEIVER.release_name()
            ),
        ));
    }
}

fn key_text(call: &CallSite) -> String {
    call.binding_key()
        .map(|key| key.to_string())
        .unwrap_or_default()
}
