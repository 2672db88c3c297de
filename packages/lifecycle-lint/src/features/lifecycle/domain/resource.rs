/*
 * Resource API Definition
 *
 * Describes one lifecycle-sensitive platform API: which method names acquire
 * and release it, which owning types qualify, and which caught exceptions
 * make a release safe to repeat.
 *
 * # Example: Broadcast subscription
 * ```text
 * acquire:  registerReceiver
 * release:  unregisterReceiver
 * owners:   android.content.Context, LocalBroadcastManager
 * guards:   IllegalArgumentException (and broader)
 * ```
 */

use serde::{Deserialize, Serialize};

/// Closed set of recognized resource kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Broadcast-style subscription, keyed by receiver
    Subscription,

    /// Managed API-client connection, one implicit resource per unit
    Connection,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Subscription, ResourceKind::Connection];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Subscription => "subscription",
            ResourceKind::Connection => "connection",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which end of the lifecycle a call represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallRole {
    Acquire,
    Release,
}

/// Static description of a resource API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceApi {
    pub kind: ResourceKind,

    /// Display name used in messages (e.g. "BroadcastReceiver")
    pub display_name: &'static str,

    pub acquire_methods: &'static [&'static str],
    pub release_methods: &'static [&'static str],

    /// Qualified names; the call's owning type must be one of these or a subtype
    pub qualifying_types: &'static [&'static str],

    /// Qualified exception names whose catch clause guards a release
    pub guard_exceptions: &'static [&'static str],
}

impl ResourceApi {
    /// Role of `method_name` for this API, by exact name
    pub fn role_of(&self, method_name: &str) -> Option<CallRole> {
        if self.acquire_methods.contains(&method_name) {
            Some(CallRole::Acquire)
        } else if self.release_methods.contains(&method_name) {
            Some(CallRole::Release)
        } else {
            None
        }
    }

    /// All method names this API reacts to
    pub fn method_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.acquire_methods
            .iter()
            .chain(self.release_methods.iter())
            .copied()
    }

    pub fn is_guard_exception(&self, qualified_name: &str) -> bool {
        self.guard_exceptions.contains(&qualified_name)
    }

    /// First acquire method, for messages
    pub fn acquire_name(&self) -> &'static str {
        self.acquire_methods.first().copied().unwrap_or("acquire")
    }

    /// First release method, for messages
    pub fn release_name(&self) -> &'static str {
        self.release_methods.first().copied().unwrap_or("release")
    }
}
