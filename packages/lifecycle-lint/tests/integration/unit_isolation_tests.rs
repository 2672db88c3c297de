//! Units never influence each other, whatever the order or thread

#[path = "../common/mod.rs"]
mod common;

use common::*;
use lifecycle_lint::features::parsing::{Parser, TreeSitterParser};
use lifecycle_lint::features::type_resolution::{JavaTypeResolver, PlatformHierarchy};
use lifecycle_lint::pipeline::{lint_source, Linter, UnitReport};
use lifecycle_lint::LifecycleAnalyzer;
use pretty_assertions::assert_eq;
use rayon::prelude::*;

fn lint_all(linter: &Linter) -> Vec<UnitReport> {
    ALL_FIXTURES
        .iter()
        .map(|(file, source)| lint_source(source, file, linter).unwrap())
        .collect()
}

#[test]
fn test_shared_linter_matches_fresh_linters() {
    let shared = Linter::default();
    let together = lint_all(&shared);

    let alone: Vec<UnitReport> = ALL_FIXTURES
        .iter()
        .map(|(file, source)| lint_fixture(file, source))
        .collect();

    assert_eq!(together, alone);
}

#[test]
fn test_order_does_not_matter() {
    let linter = Linter::default();
    let forward = lint_all(&linter);

    let mut backward: Vec<UnitReport> = ALL_FIXTURES
        .iter()
        .rev()
        .map(|(file, source)| lint_source(source, file, &linter).unwrap())
        .collect();
    backward.reverse();

    assert_eq!(forward, backward);
}

#[test]
fn test_concurrent_units_match_sequential() {
    let linter = Linter::default();
    let sequential = lint_all(&linter);

    for _ in 0..4 {
        let concurrent: Vec<UnitReport> = ALL_FIXTURES
            .par_iter()
            .map(|(file, source)| lint_source(source, file, &linter).unwrap())
            .collect();
        assert_eq!(concurrent, sequential);
    }
}

#[test]
fn test_abandoned_unit_leaves_no_trace() {
    let parser = TreeSitterParser::java();
    let platform = PlatformHierarchy::new();
    let analyzer = LifecycleAnalyzer::new();

    // Registers without unregistering; never finished
    let leaky = parser.parse(NO_UNREGISTER, "NoUnregister.java").unwrap();
    let leaky_resolver = JavaTypeResolver::new(&leaky, &platform);
    let leaky_calls = leaky.call_sites();
    let mut sink = Vec::new();
    {
        let mut unit = analyzer.begin_unit(&leaky, &leaky_resolver);
        for call in &leaky_calls {
            unit.on_call_site(call, &mut sink);
        }
    }
    assert!(sink.is_empty());

    // Unregisters the same binding twice behind guards; clean alone
    let guarded = parser
        .parse(UNREGISTER_TWICE_WITH_TRY, "UnregisterTwiceWithTry.java")
        .unwrap();
    let resolver = JavaTypeResolver::new(&guarded, &platform);
    let diagnostics = analyzer.analyze_unit(&guarded, &resolver, &guarded.call_sites());

    assert!(diagnostics.is_empty(), "{diagnostics:#?}");
}

#[test]
fn test_leaky_unit_does_not_pair_with_next_unit() {
    let linter = Linter::default();

    // `receiver` is registered in one file and unregistered in another
    let register_only = lint_fixture("NoUnregister.java", NO_UNREGISTER);
    let correct = lint_source(CORRECT_USAGE_MULTIPLE, "CorrectUsageMultiple.java", &linter).unwrap();
    let register_again = lint_source(NO_UNREGISTER, "NoUnregister.java", &linter).unwrap();

    assert_eq!(register_only, register_again);
    assert_clean(&correct);
    assert_eq!(register_again.diagnostics.len(), 1);
}
