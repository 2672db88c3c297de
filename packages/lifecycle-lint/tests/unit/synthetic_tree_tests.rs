//! Analyzer over hand-built trees
//!
//! Covers shapes that are awkward to pin down through the Java front end:
//! lambda and anonymous-class boundaries, catch handlers, unresolved owners.

#[path = "../common/mod.rs"]
mod common;

use common::*;
use lifecycle_lint::features::lifecycle::{LifecycleAnalyzer, TypeResolver, ViolationKind};
use lifecycle_lint::features::parsing::SyntaxTree;
use pretty_assertions::assert_eq;

const CLIENT: &str = "com.google.android.gms.common.api.GoogleApiClient";

fn analyze<R: TypeResolver>(tree: &SyntaxTree, resolver: &R) -> Vec<(u32, ViolationKind)> {
    let mut diagnostics = LifecycleAnalyzer::new().analyze_unit(tree, resolver, &tree.call_sites());
    diagnostics.sort_by_key(|d| (d.span, d.node));
    kinds_by_line(&diagnostics)
}

#[test]
fn test_lambda_is_outside_the_try() {
    let mut main = ComponentBuilder::new("Main", "Activity");
    let on_resume = main.method("onResume");
    main.call(on_resume, "registerReceiver", None, "receiver");

    let on_pause = main.method("onPause");
    let (try_block, _) = main.try_catch(on_pause, &["IllegalArgumentException"]);
    let deferred = main.lambda(try_block);
    main.call(deferred, "unregisterReceiver", None, "receiver");

    let on_destroy = main.method("onDestroy");
    let (try_block, _) = main.try_catch(on_destroy, &["IllegalArgumentException"]);
    main.call(try_block, "unregisterReceiver", None, "receiver");

    let tree = main.build();
    assert_eq!(
        analyze(&tree, &TableResolver::new(&tree)),
        vec![(2, ViolationKind::UnguardedDuplicateRelease)]
    );
}

#[test]
fn test_catch_handler_is_not_protected() {
    let mut main = ComponentBuilder::new("Main", "Activity");
    let on_resume = main.method("onResume");
    main.call(on_resume, "registerReceiver", None, "receiver");

    let on_pause = main.method("onPause");
    let (try_block, handler) = main.try_catch(on_pause, &["IllegalArgumentException"]);
    main.call(try_block, "unregisterReceiver", None, "receiver");
    main.call(handler, "unregisterReceiver", None, "receiver");

    let tree = main.build();
    assert_eq!(
        analyze(&tree, &TableResolver::new(&tree)),
        vec![(3, ViolationKind::UnguardedDuplicateRelease)]
    );
}

#[test]
fn test_multi_catch_with_a_broader_type_guards() {
    let mut main = ComponentBuilder::new("Main", "Activity");
    let on_resume = main.method("onResume");
    main.call(on_resume, "registerReceiver", None, "receiver");

    for hook in ["onPause", "onDestroy"] {
        let body = main.method(hook);
        let (try_block, _) = main.try_catch(body, &["IllegalStateException", "RuntimeException"]);
        main.call(try_block, "unregisterReceiver", None, "receiver");
    }

    let tree = main.build();
    assert!(analyze(&tree, &TableResolver::new(&tree)).is_empty());
}

#[test]
fn test_unrelated_catch_type_does_not_guard() {
    let mut main = ComponentBuilder::new("Main", "Activity");
    for hook in ["onPause", "onDestroy"] {
        let body = main.method(hook);
        let (try_block, _) = main.try_catch(body, &["IllegalStateException"]);
        main.call(try_block, "unregisterReceiver", None, "receiver");
    }

    let tree = main.build();
    assert_eq!(
        analyze(&tree, &TableResolver::new(&tree)),
        vec![
            (1, ViolationKind::UnguardedDuplicateRelease),
            (2, ViolationKind::UnguardedDuplicateRelease),
        ]
    );
}

#[test]
fn test_lambda_keeps_the_enclosing_hook() {
    let mut main = ComponentBuilder::new("Main", "Activity");
    let on_resume = main.method("onResume");
    let callback = main.lambda(on_resume);
    main.call_no_args(callback, "connect", Some("client"));
    let on_stop = main.method("onStop");
    main.call_no_args(on_stop, "disconnect", Some("client"));

    let tree = main.build();
    let resolver = TableResolver::new(&tree).receiver("client", CLIENT);
    assert_eq!(
        analyze(&tree, &resolver),
        vec![(1, ViolationKind::WrongCallerContext)]
    );
}

#[test]
fn test_anonymous_class_methods_are_not_hooks() {
    let mut main = ComponentBuilder::new("Main", "Activity");
    let on_resume = main.method("onResume");
    let task = main.anonymous(on_resume, "Runnable");
    let run = main.method_in(task, "run");
    main.call_no_args(run, "connect", Some("client"));

    let tree = main.build();
    let resolver = TableResolver::new(&tree).receiver("client", CLIENT);
    assert_eq!(
        analyze(&tree, &resolver),
        vec![(1, ViolationKind::UnmatchedAcquisition)]
    );
}

#[test]
fn test_implicit_receiver_in_anonymous_class_is_the_outer_component() {
    let mut main = ComponentBuilder::new("Main", "Activity");
    let on_create = main.method("onCreate");
    let receiver = main.anonymous(on_create, "BroadcastReceiver");
    let on_receive = main.method_in(receiver, "onReceive");
    main.call(on_receive, "unregisterReceiver", None, "this");
    main.call(on_receive, "unregisterReceiver", None, "this");

    let tree = main.build();
    assert_eq!(
        analyze(&tree, &TableResolver::new(&tree)),
        vec![
            (1, ViolationKind::UnguardedDuplicateRelease),
            (2, ViolationKind::UnguardedDuplicateRelease),
        ]
    );
}

#[test]
fn test_reconnect_from_connection_failed() {
    let mut main = ComponentBuilder::new("Main", "Activity");
    let on_start = main.method("onStart");
    main.call_no_args(on_start, "connect", Some("client"));
    let on_stop = main.method("onStop");
    main.call_no_args(on_stop, "disconnect", Some("client"));
    let failed = main.method("onConnectionFailed");
    main.call_no_args(failed, "connect", Some("client"));

    let tree = main.build();
    let resolver = TableResolver::new(&tree).receiver("client", CLIENT);
    assert!(analyze(&tree, &resolver).is_empty());
}

#[test]
fn test_fragment_hooks_are_checked() {
    let mut map = ComponentBuilder::new("Map", "androidx.fragment.app.Fragment");
    let on_pause = map.method("onPause");
    map.call_no_args(on_pause, "connect", Some("client"));
    let on_stop = map.method("onStop");
    map.call_no_args(on_stop, "disconnect", Some("client"));

    let tree = map.build();
    let resolver = TableResolver::new(&tree).receiver("client", CLIENT);
    assert_eq!(
        analyze(&tree, &resolver),
        vec![(1, ViolationKind::WrongCallerContext)]
    );
}

#[test]
fn test_register_without_arguments_is_skipped() {
    let mut main = ComponentBuilder::new("Main", "Activity");
    let on_resume = main.method("onResume");
    main.call_no_args(on_resume, "registerReceiver", None);

    let tree = main.build();
    assert!(analyze(&tree, &TableResolver::new(&tree)).is_empty());
}

#[test]
fn test_unregister_then_register_again_is_legal() {
    let mut main = ComponentBuilder::new("Main", "Activity");
    let on_resume = main.method("onResume");
    main.call(on_resume, "registerReceiver", None, "receiver");
    main.call(on_resume, "unregisterReceiver", None, "receiver");
    main.call(on_resume, "registerReceiver", None, "receiver");

    let tree = main.build();
    assert!(analyze(&tree, &TableResolver::new(&tree)).is_empty());
}

#[test]
fn test_unresolved_owner_is_skipped() {
    let mut main = ComponentBuilder::new("Main", "Activity");
    let on_resume = main.method("onResume");
    main.call(on_resume, "registerReceiver", Some("mystery"), "receiver");

    let tree = main.build();
    assert!(analyze(&tree, &TableResolver::new(&tree)).is_empty());
}

#[test]
fn test_non_context_owner_is_ignored() {
    let mut main = ComponentBuilder::new("Main", "Activity");
    let on_resume = main.method("onResume");
    main.call(on_resume, "registerReceiver", Some("bus"), "receiver");

    let tree = main.build();
    let resolver = TableResolver::new(&tree).receiver("bus", "com.example.EventBus");
    assert!(analyze(&tree, &resolver).is_empty());
}

#[test]
fn test_owner_resolved_only_for_candidate_names() {
    let mut main = ComponentBuilder::new("Main", "Activity");
    let on_create = main.method("onCreate");
    main.call(on_create, "setContentView", None, "layout");
    main.call(on_create, "findViewById", None, "id");
    main.call_no_args(on_create, "toString", None);

    let tree = main.build();
    let resolver = TableResolver::new(&tree);
    assert!(analyze(&tree, &resolver).is_empty());
    assert_eq!(resolver.owning_type_lookups(), 0);

    let mut main = ComponentBuilder::new("Main", "Activity");
    let on_create = main.method("onCreate");
    main.call(on_create, "setContentView", None, "layout");
    main.call(on_create, "registerReceiver", None, "receiver");
    main.call(on_create, "unregisterReceiver", None, "receiver");

    let tree = main.build();
    let resolver = TableResolver::new(&tree);
    assert!(analyze(&tree, &resolver).is_empty());
    assert_eq!(resolver.owning_type_lookups(), 2);
}

#[test]
fn test_plain_class_connection_has_no_context_checks() {
    let mut helper = ComponentBuilder::new("Helper", "Object");
    let open = helper.method("open");
    helper.call_no_args(open, "connect", Some("client"));
    let close = helper.method("close");
    helper.call_no_args(close, "disconnect", Some("client"));

    let tree = helper.build();
    let resolver = TableResolver::new(&tree).receiver("client", CLIENT);
    assert!(analyze(&tree, &resolver).is_empty());
}
