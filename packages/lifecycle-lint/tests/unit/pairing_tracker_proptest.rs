//! Property-based tests for the pairing tracker
//!
//! Random acquire/release sequences over a handful of keys, checked against
//! a straightforward reference model:
//! - Duplicates: an acquire while the key is live
//! - Unmatched: keys acquired but never released
//! - Unguarded duplicates: unguarded releases of keys released twice or more

use lifecycle_lint::features::lifecycle::{AcquireOutcome, BindingKey, CallSite, PairingTracker};
use lifecycle_lint::shared::models::{NodeId, Span};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy)]
enum Op {
    Acquire,
    Release { guarded: bool },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Acquire),
        any::<bool>().prop_map(|guarded| Op::Release { guarded }),
    ]
}

fn sequence_strategy() -> impl Strategy<Value = Vec<(u8, Op)>> {
    prop::collection::vec((0u8..4, op_strategy()), 0..48)
}

fn call(line: u32, key: &str) -> CallSite {
    CallSite::new("call", NodeId(line), Span::line(line)).with_arguments([key])
}

fn key_name(key: u8) -> String {
    format!("receiver{key}")
}

#[derive(Default)]
struct Model {
    live: BTreeMap<u8, bool>,
    acquired: BTreeSet<u8>,
    releases: BTreeMap<u8, Vec<(u32, bool)>>,
    duplicates: Vec<u32>,
}

impl Model {
    fn run(ops: &[(u8, Op)]) -> Self {
        let mut model = Model::default();
        for (index, &(key, op)) in ops.iter().enumerate() {
            let line = index as u32 + 1;
            match op {
                Op::Acquire => {
                    if model.live.get(&key).copied().unwrap_or(false) {
                        model.duplicates.push(line);
                    } else {
                        model.live.insert(key, true);
                        model.acquired.insert(key);
                    }
                }
                Op::Release { guarded } => {
                    model.live.insert(key, false);
                    model.releases.entry(key).or_default().push((line, guarded));
                }
            }
        }
        model
    }

    fn unmatched(&self) -> BTreeSet<u8> {
        self.acquired
            .iter()
            .copied()
            .filter(|key| !self.releases.contains_key(key))
            .collect()
    }

    fn unguarded_duplicates(&self) -> Vec<u32> {
        let mut lines: Vec<u32> = self
            .releases
            .values()
            .filter(|releases| releases.len() > 1)
            .flatten()
            .filter(|(_, guarded)| !guarded)
            .map(|(line, _)| *line)
            .collect();
        lines.sort_unstable();
        lines
    }
}

/// Replay `ops`, returning the lines of duplicate acquisitions
fn replay(tracker: &mut PairingTracker, ops: &[(u8, Op)]) -> Vec<u32> {
    let mut duplicates = Vec::new();
    for (index, &(key, op)) in ops.iter().enumerate() {
        let line = index as u32 + 1;
        let name = key_name(key);
        let site = call(line, &name);
        match op {
            Op::Acquire => {
                if let AcquireOutcome::Duplicate { .. } = tracker.record_acquire(BindingKey::new(&name), &site) {
                    duplicates.push(line);
                }
            }
            Op::Release { guarded } => tracker.record_release(BindingKey::new(&name), &site, guarded),
        }
    }
    duplicates
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_duplicates_match_model(ops in sequence_strategy()) {
        let mut tracker = PairingTracker::new();
        let duplicates = replay(&mut tracker, &ops);

        prop_assert_eq!(duplicates, Model::run(&ops).duplicates);
    }

    #[test]
    fn prop_report_matches_model(ops in sequence_strategy()) {
        let mut tracker = PairingTracker::new();
        replay(&mut tracker, &ops);
        let report = tracker.finish();
        let model = Model::run(&ops);

        let unmatched: BTreeSet<String> = report
            .unmatched_acquisitions
            .iter()
            .map(|call| call.arguments[0].clone())
            .collect();
        let expected: BTreeSet<String> = model.unmatched().into_iter().map(key_name).collect();
        prop_assert_eq!(unmatched, expected);

        let unguarded: Vec<u32> = report
            .unguarded_duplicate_releases
            .iter()
            .map(|call| call.span.start_line)
            .collect();
        prop_assert_eq!(unguarded, model.unguarded_duplicates());
    }

    #[test]
    fn prop_unmatched_points_at_first_live_acquire(ops in sequence_strategy()) {
        let mut tracker = PairingTracker::new();
        replay(&mut tracker, &ops);

        for call in tracker.finish().unmatched_acquisitions {
            let first = ops
                .iter()
                .position(|(key, op)| matches!(op, Op::Acquire) && key_name(*key) == call.arguments[0])
                .map(|index| index as u32 + 1);
            prop_assert_eq!(Some(call.span.start_line), first);
        }
    }

    #[test]
    fn prop_balanced_pairs_are_clean(keys in prop::collection::vec(0u8..4, 0..16)) {
        let mut ops = Vec::new();
        for key in keys {
            ops.push((key, Op::Acquire));
            ops.push((key, Op::Release { guarded: false }));
        }

        let mut tracker = PairingTracker::new();
        let duplicates = replay(&mut tracker, &ops);
        let report = tracker.finish();

        prop_assert!(duplicates.is_empty());
        prop_assert!(report.unmatched_acquisitions.is_empty());
        // Keys paired more than once are released in several places
        let model = Model::run(&ops);
        prop_assert_eq!(report.unguarded_duplicate_releases.len(), model.unguarded_duplicates().len());
    }

    #[test]
    fn prop_finish_resets(ops in sequence_strategy()) {
        let mut tracker = PairingTracker::new();
        replay(&mut tracker, &ops);
        let _ = tracker.finish();

        prop_assert!(tracker.is_empty());
        prop_assert!(tracker.finish().is_empty());
    }
}
