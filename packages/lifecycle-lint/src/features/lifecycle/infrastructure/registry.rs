/*
 * Issue Registry
 *
 * The issues this analyzer can report, one per resource kind.
 */

use crate::features::lifecycle::domain::{Category, Issue, ResourceKind, Severity};

pub const BROADCAST_RECEIVER_ISSUE: Issue = Issue {
    id: "BroadcastReceiverLifecycle",
    brief_description: "Incorrect `BroadcastReceiver` lifecycle handling",
    explanation: "Every `registerReceiver()` should have a matching `unregisterReceiver()` in the \
                  same component. Unregistering a receiver that is not registered throws \
                  `IllegalArgumentException`, so a receiver unregistered in more than one place \
                  should be guarded with a try/catch. Receivers must not be unregistered during \
                  `onSaveInstanceState()`.",
    category: Category::Performance,
    priority: 5,
    severity: Severity::Warning,
    more_info: Some("https://developer.android.com/reference/android/content/Context#unregisterReceiver(android.content.BroadcastReceiver)"),
};

pub const GOOGLE_API_CLIENT_ISSUE: Issue = Issue {
    id: "GoogleApiClientLifecycle",
    brief_description: "Incorrect `GoogleApiClient` lifecycle handling",
    explanation: "You should always disconnect a GoogleApiClient when you are done with it. \
                  For activities and fragments in most cases connection is done during onStart \
                  and disconnection during onStop().",
    category: Category::Performance,
    priority: 5,
    severity: Severity::Warning,
    more_info: Some("https://developers.google.com/android/reference/com/google/android/gms/common/api/GoogleApiClient#nested-class-summary"),
};

/// Registry of every issue the analyzer knows about
pub struct IssueRegistry;

impl IssueRegistry {
    /// All issues, in resource-kind order
    pub fn issues() -> Vec<&'static Issue> {
        ResourceKind::ALL.iter().map(|kind| Self::issue_for(*kind)).collect()
    }

    /// Issue reported by the rule for `kind`
    pub fn issue_for(kind: ResourceKind) -> &'static Issue {
        match kind {
            ResourceKind::Subscription => &BROADCAST_RECEIVER_ISSUE,
            ResourceKind::Connection => &GOOGLE_API_CLIENT_ISSUE,
        }
    }

    pub fn find(id: &str) -> Option<&'static Issue> {
        Self::issues().into_iter().find(|issue| issue.id == id)
    }
}
