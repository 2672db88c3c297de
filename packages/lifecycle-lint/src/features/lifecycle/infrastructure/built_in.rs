/*
 * Built-in Resource APIs
 *
 * Platform APIs recognized out-of-the-box:
 * - BROADCAST_RECEIVER: registerReceiver/unregisterReceiver
 * - GOOGLE_API_CLIENT: connect/disconnect
 *
 * plus the component base types used to classify caller contexts.
 */

use crate::features::lifecycle::domain::{ResourceApi, ResourceKind};

/// `android.content.Context`
pub const CONTEXT: &str = "android.content.Context";

/// Broadcast receiver subscription
///
/// Acquire: registerReceiver(receiver, filter)
/// Release: unregisterReceiver(receiver)
///
/// Reachable through any Context (activities, services, application) or
/// through LocalBroadcastManager. unregisterReceiver throws
/// IllegalArgumentException for a receiver that is not registered, so a
/// release caught for it (or a broader type) may safely be repeated.
pub const BROADCAST_RECEIVER: ResourceApi = ResourceApi {
    kind: ResourceKind::Subscription,
    display_name: "BroadcastReceiver",
    acquire_methods: &["registerReceiver"],
    release_methods: &["unregisterReceiver"],
    qualifying_types: &[
        CONTEXT,
        "android.support.v4.content.LocalBroadcastManager",
        "androidx.localbroadcastmanager.content.LocalBroadcastManager",
    ],
    guard_exceptions: &[
        "java.lang.IllegalArgumentException",
        "java.lang.RuntimeException",
        "java.lang.Exception",
        "java.lang.Throwable",
    ],
};

/// Google API client connection
///
/// Acquire: connect()
/// Release: disconnect()
///
/// Activities and fragments should connect in onStart() and disconnect in
/// onStop(); reconnecting from onConnectionFailed() is the documented
/// recovery path.
pub const GOOGLE_API_CLIENT: ResourceApi = ResourceApi {
    kind: ResourceKind::Connection,
    display_name: "GoogleApiClient",
    acquire_methods: &["connect"],
    release_methods: &["disconnect"],
    qualifying_types: &["com.google.android.gms.common.api.GoogleApiClient"],
    guard_exceptions: &[],
};

/// Escape hook where connect() is allowed outside onStart()
pub const ON_CONNECTION_FAILED: &str = "onConnectionFailed";

/// Activity-like component bases
pub const ACTIVITY_TYPES: &[&str] = &["android.app.Activity"];

/// Fragment-like component bases
pub const FRAGMENT_TYPES: &[&str] = &[
    "android.app.Fragment",
    "android.support.v4.app.Fragment",
    "androidx.fragment.app.Fragment",
];

/// API definition for a resource kind
pub fn resource_api(kind: ResourceKind) -> &'static ResourceApi {
    match kind {
        ResourceKind::Subscription => &BROADCAST_RECEIVER,
        ResourceKind::Connection => &GOOGLE_API_CLIENT,
    }
}
