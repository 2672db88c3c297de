/*
 * Pairing Tracker
 *
 * Per-unit acquisition/release bookkeeping keyed by binding identity.
 *
 * - acquisitions: key -> live acquisition (at most one per key)
 * - releases:     key -> every release seen, `None` for guarded ones
 *
 * A release retires the live acquisition of its key, so
 * acquire -> release -> acquire is a legal sequence.
 */

use crate::features::lifecycle::domain::{BindingKey, CallSite};
use rustc_hash::FxHashMap;
use std::mem;
use tracing::trace;

/// Result of recording an acquisition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquireOutcome {
    Registered,

    /// A live acquisition already exists; it is kept
    Duplicate { first: CallSite },
}

#[derive(Debug, Clone)]
struct Acquisition {
    call: CallSite,
    live: bool,
}

/// End-of-unit pairing findings, each list sorted by position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairingReport {
    /// Live acquisitions whose key was never released
    pub unmatched_acquisitions: Vec<CallSite>,

    /// Unguarded releases of keys released more than once
    pub unguarded_duplicate_releases: Vec<CallSite>,
}

impl PairingReport {
    pub fn is_empty(&self) -> bool {
        self.unmatched_acquisitions.is_empty() && self.unguarded_duplicate_releases.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct PairingTracker {
    acquisitions: FxHashMap<BindingKey, Acquisition>,
    releases: FxHashMap<BindingKey, Vec<Option<CallSite>>>,
}

impl PairingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_acquire(&mut self, key: BindingKey, call: &CallSite) -> AcquireOutcome {
        match self.acquisitions.get_mut(&key) {
            Some(existing) if existing.live => {
                trace!("duplicate acquire of {} at {}", key, call.span);
                AcquireOutcome::Duplicate {
                    first: existing.call.clone(),
                }
            }
            Some(existing) => {
                trace!("re-acquire of {} at {}", key, call.span);
                existing.call = call.clone();
                existing.live = true;
                AcquireOutcome::Registered
            }
            None => {
                trace!("acquire of {} at {}", key, call.span);
                self.acquisitions.insert(
                    key,
                    Acquisition {
                        call: call.clone(),
                        live: true,
                    },
                );
                AcquireOutcome::Registered
            }
        }
    }

    pub fn record_release(&mut self, key: BindingKey, call: &CallSite, guarded: bool) {
        trace!("release of {} at {} (guarded: {})", key, call.span, guarded);

        if let Some(acquisition) = self.acquisitions.get_mut(&key) {
            acquisition.live = false;
        }

        let entry = if guarded { None } else { Some(call.clone()) };
        self.releases.entry(key).or_default().push(entry);
    }

    pub fn is_empty(&self) -> bool {
        self.acquisitions.is_empty() && self.releases.is_empty()
    }

    /// Compute end-of-unit findings and reset the tracker
    pub fn finish(&mut self) -> PairingReport {
        let acquisitions = mem::take(&mut self.acquisitions);
        let releases = mem::take(&mut self.releases);

        let mut unmatched_acquisitions: Vec<CallSite> = acquisitions
            .into_iter()
            .filter(|(key, acquisition)| acquisition.live && !releases.contains_key(key))
            .map(|(_, acquisition)| acquisition.call)
            .collect();

        let mut unguarded_duplicate_releases: Vec<CallSite> = releases
            .into_values()
            .filter(|entries| entries.len() > 1)
            .flatten()
            .flatten()
            .collect();

        unmatched_acquisitions.sort_by_key(|call| (call.span, call.node));
        unguarded_duplicate_releases.sort_by_key(|call| (call.span, call.node));

        PairingReport {
            unmatched_acquisitions,
            unguarded_duplicate_releases,
        }
    }
}
