//! Broadcast receiver rule over parsed Java components

#[path = "../common/mod.rs"]
mod common;

use common::*;
use lifecycle_lint::features::lifecycle::ViolationKind;
use pretty_assertions::assert_eq;

const ISSUE: &str = "BroadcastReceiverLifecycle";

#[test]
fn test_correct_usage_is_clean() {
    assert_clean(&lint_fixture("CorrectUsageMultiple.java", CORRECT_USAGE_MULTIPLE));
}

#[test]
fn test_no_unregister() {
    let report = lint_fixture("NoUnregister.java", NO_UNREGISTER);

    assert_eq!(
        kinds_by_line(&report.diagnostics),
        vec![(
            line_of(NO_UNREGISTER, "registerReceiver(", 0),
            ViolationKind::UnmatchedAcquisition
        )]
    );
    assert_issue(&report.diagnostics, ISSUE);
    assert_eq!(
        report.diagnostics[0].message,
        "Found a `registerReceiver()` for `receiver` but no matching `unregisterReceiver()` in the class"
    );
}

#[test]
fn test_no_unregister_through_local_broadcast_manager() {
    let report = lint_fixture("NoUnregisterLocal.java", NO_UNREGISTER_LOCAL);

    assert_eq!(
        kinds_by_line(&report.diagnostics),
        vec![(
            line_of(NO_UNREGISTER_LOCAL, "registerReceiver(", 0),
            ViolationKind::UnmatchedAcquisition
        )]
    );
}

#[test]
fn test_only_the_unreleased_receiver_is_reported() {
    let report = lint_fixture("NoUnregisterMultiple.java", NO_UNREGISTER_MULTIPLE);

    assert_eq!(
        kinds_by_line(&report.diagnostics),
        vec![(
            line_of(NO_UNREGISTER_MULTIPLE, "registerReceiver(receiver1", 0),
            ViolationKind::UnmatchedAcquisition
        )]
    );
    assert!(report.diagnostics[0].message.contains("`receiver1`"));
}

#[test]
fn test_register_twice_reports_second_registration() {
    let report = lint_fixture("RegisterTwice.java", REGISTER_TWICE);

    let first = line_of(REGISTER_TWICE, "registerReceiver(", 0);
    let second = line_of(REGISTER_TWICE, "registerReceiver(", 1);
    assert_eq!(
        kinds_by_line(&report.diagnostics),
        vec![(second, ViolationKind::DuplicateAcquisition)]
    );
    assert!(report.diagnostics[0]
        .message
        .contains(&format!("first registered at line {first}")));
}

#[test]
fn test_unregister_during_save_instance_state() {
    let report = lint_fixture("UnregisterDuringSaveInstance.java", UNREGISTER_DURING_SAVE_INSTANCE);

    assert_eq!(
        kinds_by_line(&report.diagnostics),
        vec![(
            line_of(UNREGISTER_DURING_SAVE_INSTANCE, "unregisterReceiver(", 0),
            ViolationKind::ReleaseDuringSaveState
        )]
    );
    assert_eq!(
        report.diagnostics[0].message,
        "`unregisterReceiver()` should not be called during `onSaveInstanceState()`"
    );
}

#[test]
fn test_guarded_double_unregister_is_clean() {
    assert_clean(&lint_fixture("UnregisterTwiceWithTry.java", UNREGISTER_TWICE_WITH_TRY));
}

#[test]
fn test_broader_catch_types_guard() {
    assert_clean(&lint_fixture(
        "UnregisterTwiceMultipleWithTry.java",
        UNREGISTER_TWICE_MULTIPLE_WITH_TRY,
    ));
}

#[test]
fn test_one_unguarded_double_unregister() {
    let report = lint_fixture("UnregisterTwiceOneGuarded.java", UNREGISTER_TWICE_ONE_GUARDED);

    assert_eq!(
        kinds_by_line(&report.diagnostics),
        vec![(
            line_of(UNREGISTER_TWICE_ONE_GUARDED, "unregisterReceiver(", 0),
            ViolationKind::UnguardedDuplicateRelease
        )]
    );
}

/// Branch conditions are not evaluated: a flag-guarded second registration
/// still counts as a duplicate.
#[test]
fn test_boolean_guard_is_still_a_duplicate() {
    let source = DOUBLE_REGISTRATION_WITH_BOOLEAN_GUARD;
    let report = lint_fixture("DoubleRegistrationWithBooleanGuard.java", source);

    assert_eq!(
        kinds_by_line(&report.diagnostics),
        vec![(
            line_of(source, "registerReceiver(", 1),
            ViolationKind::DuplicateAcquisition
        )]
    );
}

#[test]
fn test_services_are_contexts_too() {
    let report = lint_fixture("SyncService.java", SERVICE_NO_UNREGISTER);
    assert_eq!(
        kinds_by_line(&report.diagnostics),
        vec![(
            line_of(SERVICE_NO_UNREGISTER, "registerReceiver(", 0),
            ViolationKind::UnmatchedAcquisition
        )]
    );
}

#[test]
fn test_same_names_on_unrelated_types_are_ignored() {
    assert_clean(&lint_fixture("EventBus.java", UNRELATED_REGISTER));
}

const REGISTER_FROM_ANONYMOUS_CLASS: &str = r#"package com.example.receivers;

import android.app.Activity;
import android.content.BroadcastReceiver;
import android.content.IntentFilter;

public class Main extends Activity
{
    private BroadcastReceiver receiver;
    private IntentFilter filter;

    @Override
    protected void onResume()
    {
        super.onResume();
        new Thread(new Runnable() {
            @Override
            public void run() {
                Main.this.registerReceiver(receiver, filter);
            }
        }).start();
    }
}
"#;

#[test]
fn test_qualified_outer_this_receiver() {
    let report = lint_fixture("Main.java", REGISTER_FROM_ANONYMOUS_CLASS);

    assert_eq!(
        kinds_by_line(&report.diagnostics),
        vec![(
            line_of(REGISTER_FROM_ANONYMOUS_CLASS, "Main.this.registerReceiver(", 0),
            ViolationKind::UnmatchedAcquisition
        )]
    );
    assert_issue(&report.diagnostics, ISSUE);
}

/// Receivers are keyed by argument text, so two distinct locals spelled
/// `r` in different hooks pair with each other.
#[test]
fn test_same_spelling_in_different_scopes_is_one_binding() {
    let source = r#"package com.example.receivers;

import android.app.Activity;
import android.content.BroadcastReceiver;
import android.content.IntentFilter;

public class Main extends Activity
{
    private IntentFilter filter;

    @Override
    protected void onResume()
    {
        super.onResume();
        BroadcastReceiver r = makeReceiver();
        registerReceiver(r, filter);
    }

    @Override
    protected void onPause()
    {
        BroadcastReceiver r = otherReceiver();
        unregisterReceiver(r);
        super.onPause();
    }
}
"#;
    assert_clean(&lint_fixture("Main.java", source));
}

#[test]
fn test_save_state_release_also_counts_toward_pairing() {
    let source = r#"package com.example.receivers;

import android.content.BroadcastReceiver;
import android.content.IntentFilter;
import android.os.Bundle;
import android.support.v7.app.AppCompatActivity;

public class Main extends AppCompatActivity
{
    private BroadcastReceiver receiver;

    @Override
    public void onResume()
    {
        super.onResume();
        registerReceiver(receiver, new IntentFilter("event"));
    }

    @Override
    public void onPause()
    {
        unregisterReceiver(receiver);
        super.onPause();
    }

    @Override
    protected void onSaveInstanceState(Bundle state)
    {
        unregisterReceiver(receiver);
        super.onSaveInstanceState(state);
    }
}
"#;
    let report = lint_fixture("Main.java", source);

    let pause = line_of(source, "unregisterReceiver(", 0);
    let save = line_of(source, "unregisterReceiver(", 1);
    assert_eq!(
        kinds_by_line(&report.diagnostics),
        vec![
            (pause, ViolationKind::UnguardedDuplicateRelease),
            (save, ViolationKind::ReleaseDuringSaveState),
            (save, ViolationKind::UnguardedDuplicateRelease),
        ]
    );
}
