//! Google API client rule over parsed Java components

#[path = "../common/mod.rs"]
mod common;

use common::*;
use lifecycle_lint::features::lifecycle::ViolationKind;
use lifecycle_lint::pipeline::{lint_source, Linter};
use lifecycle_lint::{LintConfig, ResourceKind};
use pretty_assertions::assert_eq;

#[test]
fn test_correct_usage_is_clean() {
    assert_clean(&lint_fixture("CorrectUsage.java", CONNECTION_CORRECT_USAGE));
}

#[test]
fn test_wrong_places_in_activity() {
    let source = CONNECTION_WRONG_PLACES;
    let report = lint_fixture("WrongPlaces.java", source);

    assert_eq!(
        kinds_by_line(&report.diagnostics),
        vec![
            (line_of(source, "client.connect()", 0), ViolationKind::WrongCallerContext),
            (line_of(source, "client.disconnect()", 0), ViolationKind::WrongCallerContext),
        ]
    );
    assert_issue(&report.diagnostics, "GoogleApiClientLifecycle");
    assert_eq!(
        report.diagnostics[0].message,
        "The best practice is to call the `GoogleApiClient` `connect()` during `onStart()`"
    );
    assert!(report.diagnostics[1].message.contains("`onStop()`"));
}

#[test]
fn test_reconnect_from_connection_failed_is_allowed() {
    let source = CONNECTION_WRONG_PLACES;
    let report = lint_fixture("WrongPlaces.java", source);

    let reconnect = line_of(source, "client.connect()", 1);
    assert!(report
        .diagnostics
        .iter()
        .all(|d| d.span.start_line != reconnect));
}

#[test]
fn test_plain_classes_get_no_context_checks() {
    assert_clean(&lint_fixture(
        "WrongPlacesNotActivity.java",
        CONNECTION_WRONG_PLACES_NOT_ACTIVITY,
    ));
}

#[test]
fn test_fragment_duplicate_connect_without_disconnect() {
    let source = CONNECTION_FRAGMENT_NO_DISCONNECT;
    let report = lint_fixture("MapFragment.java", source);

    let first = line_of(source, "client.connect()", 0);
    let second = line_of(source, "client.connect()", 1);
    assert_eq!(
        kinds_by_line(&report.diagnostics),
        vec![
            (first, ViolationKind::UnmatchedAcquisition),
            (second, ViolationKind::DuplicateAcquisition),
            (second, ViolationKind::WrongCallerContext),
        ]
    );
    assert_eq!(
        report.diagnostics[0].message,
        "Found a `GoogleApiClient` `connect()` but no `disconnect()` calls in the class"
    );
    assert!(report.diagnostics[1]
        .message
        .contains(&format!("first connected at line {first}")));
}

#[test]
fn test_disabled_connection_rule() {
    let config = LintConfig::default().with_rule(ResourceKind::Connection, false);
    let linter = Linter::new(config);

    let report = lint_source(CONNECTION_WRONG_PLACES, "WrongPlaces.java", &linter).unwrap();
    assert_clean(&report);
}
