//! Connection pairing rule (Google API client)
//!
//! Unkeyed: the unit is assumed to manage a single client.

use super::CallEvent;
use crate::features::lifecycle::domain::{CallRole, CallSite, Diagnostic, LifecycleHook, ViolationKind};
use crate::features::lifecycle::infrastructure::built_in::ON_CONNECTION_FAILED;
use crate::features::lifecycle::infrastructure::{GOOGLE_API_CLIENT, GOOGLE_API_CLIENT_ISSUE};
use crate::features::lifecycle::ports::DiagnosticSink;
use tracing::trace;

#[derive(Debug, Default, Clone)]
pub struct ConnectionState {
    seen_acquire: bool,
    seen_release: bool,
    first_acquire: Option<CallSite>,
}

impl ConnectionState {
    pub fn is_empty(&self) -> bool {
        !self.seen_acquire && !self.seen_release && self.first_acquire.is_none()
    }

    pub(super) fn on_event<S>(&mut self, event: &CallEvent<'_>, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        match event.role {
            CallRole::Acquire => self.on_acquire(event, sink),
            CallRole::Release => self.on_release(event, sink),
        }
    }

    fn on_acquire<S>(&mut self, event: &CallEvent<'_>, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        let call = event.call;

        if self.seen_acquire && !self.seen_release {
            let first_line = self
                .first_acquire
                .as_ref()
                .map(|first| first.span.start_line)
                .unwrap_or_default();
            sink.report(Diagnostic::at(
                &GOOGLE_API_CLIENT_ISSUE,
                ViolationKind::DuplicateAcquisition,
                call,
                format!(
                    "`GoogleApiClient` `{}()` called again without a `{}()` (first connected at line {})",
                    GOOGLE_API_CLIENT.acquire_name(),
                    GOOGLE_API_CLIENT.release_name(),
                    first_line
                ),
            ));
        }

        self.seen_acquire = true;
        if self.first_acquire.is_none() {
            self.first_acquire = Some(call.clone());
        }
        trace!("connect at {} (context: {:?})", call.span, event.context);

        let context = event.context;
        if context.is_platform_component()
            && !context.is_in(LifecycleHook::Start)
            && context.method_name != ON_CONNECTION_FAILED
        {
            sink.report(Diagnostic::at(
                &GOOGLE_API_CLIENT_ISSUE,
                ViolationKind::WrongCallerContext,
                call,
                format!(
                    "The best practice is to call the `GoogleApiClient` `{}()` during `{}`",
                    GOOGLE_API_CLIENT.acquire_name(),
                    LifecycleHook::Start
                ),
            ));
        }
    }

    fn on_release<S>(&mut self, event: &CallEvent<'_>, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        self.seen_release = true;
        trace!("disconnect at {} (context: {:?})", event.call.span, event.context);

        let context = event.context;
        if context.is_platform_component() && !context.is_in(LifecycleHook::Stop) {
            sink.report(Diagnostic::at(
                &GOOGLE_API_CLIENT_ISSUE,
                ViolationKind::WrongCallerContext,
                event.call,
                format!(
                    "The best practice is to call the `GoogleApiClient` `{}()` during `{}`",
                    GOOGLE_API_CLIENT.release_name(),
                    LifecycleHook::Stop
                ),
            ));
        }
    }

    pub(super) fn finish<S>(&mut self, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        let state = std::mem::take(self);

        if let (true, false, Some(first)) = (state.seen_acquire, state.seen_release, state.first_acquire) {
            sink.report(Diagnostic::at(
                &GOOGLE_API_CLIENT_ISSUE,
                ViolationKind::UnmatchedAcquisition,
                &first,
                format!(
                    "Found a `GoogleApiClient` `{}()` but no `{}()` calls in the class",
                    GOOGLE_API_CLIENT.acquire_name(),
                    GOOGLE_API_CLIENT.release_name()
                ),
            ));
        }
    }
}
