//! Platform Type Hierarchy
//!
//! Qualified platform types and their direct supertypes: the Android
//! component chain, the resource APIs and the `java.lang` exceptions.
//! Extra edges from configuration are merged on top.
//!
//! Ancestry answers depend only on the table, so they are memoized in a
//! `DashMap` shared by every unit of a run (and every rayon worker).

use dashmap::DashMap;
use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Default memo capacity for ancestry queries
const ANCESTRY_CACHE_CAPACITY: usize = 1_024;

const OBJECT: &str = "java.lang.Object";

/// Built-in table: type -> direct supertypes
///
/// Order matters for simple-name lookup: the first type with a given simple
/// name wins.
const BUILT_IN_TYPES: &[(&str, &[&str])] = &[
    (OBJECT, &[]),
    // Contexts and components
    ("android.content.Context", &[OBJECT]),
    ("android.content.ContextWrapper", &["android.content.Context"]),
    ("android.view.ContextThemeWrapper", &["android.content.ContextWrapper"]),
    ("android.app.Activity", &["android.view.ContextThemeWrapper"]),
    ("android.app.ListActivity", &["android.app.Activity"]),
    ("android.app.Service", &["android.content.ContextWrapper"]),
    ("android.app.IntentService", &["android.app.Service"]),
    ("android.app.Application", &["android.content.ContextWrapper"]),
    ("android.app.Fragment", &[OBJECT]),
    ("android.app.DialogFragment", &["android.app.Fragment"]),
    ("android.app.ListFragment", &["android.app.Fragment"]),
    ("androidx.activity.ComponentActivity", &["android.app.Activity"]),
    ("androidx.fragment.app.FragmentActivity", &["androidx.activity.ComponentActivity"]),
    ("androidx.appcompat.app.AppCompatActivity", &["androidx.fragment.app.FragmentActivity"]),
    ("androidx.fragment.app.Fragment", &[OBJECT]),
    ("androidx.fragment.app.DialogFragment", &["androidx.fragment.app.Fragment"]),
    ("android.support.v4.app.FragmentActivity", &["android.app.Activity"]),
    ("android.support.v7.app.AppCompatActivity", &["android.support.v4.app.FragmentActivity"]),
    ("android.support.v4.app.Fragment", &[OBJECT]),
    ("android.support.v4.app.DialogFragment", &["android.support.v4.app.Fragment"]),
    // Broadcasts
    ("android.content.BroadcastReceiver", &[OBJECT]),
    ("android.content.IntentFilter", &[OBJECT]),
    ("android.content.Intent", &[OBJECT]),
    ("androidx.localbroadcastmanager.content.LocalBroadcastManager", &[OBJECT]),
    ("android.support.v4.content.LocalBroadcastManager", &[OBJECT]),
    // Play services
    ("com.google.android.gms.common.api.GoogleApiClient", &[OBJECT]),
    ("com.google.android.gms.common.ConnectionResult", &[OBJECT]),
    ("android.os.Bundle", &[OBJECT]),
    // Exceptions
    ("java.lang.Throwable", &[OBJECT]),
    ("java.lang.Exception", &["java.lang.Throwable"]),
    ("java.lang.Error", &["java.lang.Throwable"]),
    ("java.lang.RuntimeException", &["java.lang.Exception"]),
    ("java.lang.IllegalArgumentException", &["java.lang.RuntimeException"]),
    ("java.lang.IllegalStateException", &["java.lang.RuntimeException"]),
    ("java.lang.NullPointerException", &["java.lang.RuntimeException"]),
    ("java.lang.SecurityException", &["java.lang.RuntimeException"]),
    ("java.io.IOException", &["java.lang.Exception"]),
];

static BUILT_IN: Lazy<Arc<PlatformHierarchy>> = Lazy::new(|| Arc::new(PlatformHierarchy::new()));

/// Known platform types and their ancestry
#[derive(Debug)]
pub struct PlatformHierarchy {
    /// Qualified name -> direct supertypes
    supertypes: FxHashMap<String, Vec<String>>,

    /// Simple name -> qualified name (first registration wins)
    simple_names: FxHashMap<String, String>,

    /// (type, ancestor) -> answer
    ancestry: DashMap<(String, String), bool>,
}

impl Default for PlatformHierarchy {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformHierarchy {
    /// Built-in table only
    pub fn new() -> Self {
        let mut hierarchy = Self {
            supertypes: FxHashMap::default(),
            simple_names: FxHashMap::default(),
            ancestry: DashMap::with_capacity(ANCESTRY_CACHE_CAPACITY),
        };
        for (ty, supers) in BUILT_IN_TYPES {
            hierarchy.insert(ty, supers.iter().copied());
        }
        hierarchy
    }

    /// Process-wide built-in table
    pub fn shared() -> Arc<Self> {
        Arc::clone(&BUILT_IN)
    }

    /// Built-in table plus configured edges (type -> direct supertypes)
    ///
    /// Configured edges are appended to a type's existing supertypes.
    pub fn with_extra_edges(edges: &BTreeMap<String, Vec<String>>) -> Self {
        let mut hierarchy = Self::new();
        for (ty, supers) in edges {
            hierarchy.insert(ty, supers.iter().map(String::as_str));
        }
        hierarchy
    }

    fn insert<'a>(&mut self, ty: &str, supers: impl IntoIterator<Item = &'a str>) {
        let entry = self.supertypes.entry(ty.to_string()).or_default();
        for sup in supers {
            if !entry.iter().any(|s| s == sup) {
                entry.push(sup.to_string());
            }
        }

        let simple = ty.rsplit('.').next().unwrap_or(ty);
        self.simple_names
            .entry(simple.to_string())
            .or_insert_with(|| ty.to_string());
    }

    pub fn contains(&self, qualified: &str) -> bool {
        self.supertypes.contains_key(qualified)
    }

    pub fn len(&self) -> usize {
        self.supertypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supertypes.is_empty()
    }

    /// Direct supertypes of a known type (empty if unknown)
    pub fn direct_supertypes(&self, qualified: &str) -> &[String] {
        self.supertypes
            .get(qualified)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Qualified name of a platform type by simple name
    pub fn qualify_simple(&self, simple: &str) -> Option<&str> {
        self.simple_names.get(simple).map(String::as_str)
    }

    /// `ty` is `ancestor` or a transitive subtype of it
    ///
    /// Unknown types are only subtypes of themselves.
    pub fn is_subtype_of(&self, ty: &str, ancestor: &str) -> bool {
        if ty == ancestor {
            return true;
        }
        if !self.contains(ty) {
            return false;
        }

        let key = (ty.to_string(), ancestor.to_string());
        if let Some(answer) = self.ancestry.get(&key) {
            return *answer;
        }

        let answer = self.walk(ty, ancestor);
        self.ancestry.insert(key, answer);
        answer
    }

    /// Cached ancestry answers
    pub fn cached_queries(&self) -> usize {
        self.ancestry.len()
    }

    fn walk(&self, ty: &str, ancestor: &str) -> bool {
        let mut visited: FxHashSet<&str> = FxHashSet::default();
        let mut stack: Vec<&str> = vec![ty];

        while let Some(current) = stack.pop() {
            if current == ancestor {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            stack.extend(self.direct_supertypes(current).iter().map(String::as_str));
        }
        false
    }
}
