/*
 * Lifecycle Hooks & Caller Context
 *
 * Platform lifecycle method names and the classification of the method that
 * lexically encloses a call site.
 */

use serde::{Deserialize, Serialize};

/// Recognized platform lifecycle callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleHook {
    Create,
    Start,
    Resume,
    Pause,
    Stop,
    Destroy,
    SaveInstanceState,
}

impl LifecycleHook {
    /// Method name the platform calls
    pub fn method_name(&self) -> &'static str {
        match self {
            LifecycleHook::Create => "onCreate",
            LifecycleHook::Start => "onStart",
            LifecycleHook::Resume => "onResume",
            LifecycleHook::Pause => "onPause",
            LifecycleHook::Stop => "onStop",
            LifecycleHook::Destroy => "onDestroy",
            LifecycleHook::SaveInstanceState => "onSaveInstanceState",
        }
    }
}

impl std::fmt::Display for LifecycleHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}()", self.method_name())
    }
}

/// Platform classification of the type owning the enclosing method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Enclosing method or its owning type could not be resolved
    Unresolved,
    /// Activity-like component
    Activity,
    /// Fragment-like component
    Fragment,
    /// Resolved, but not a platform component
    Other,
}

impl ComponentKind {
    pub fn is_platform_component(&self) -> bool {
        matches!(self, ComponentKind::Activity | ComponentKind::Fragment)
    }
}

/// Classification of the method lexically enclosing a call site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerContext {
    pub component: ComponentKind,

    /// Simple name of the enclosing method; empty when there is none
    /// (e.g. a field initializer)
    pub method_name: String,
}

impl CallerContext {
    pub fn new(component: ComponentKind, method_name: impl Into<String>) -> Self {
        Self {
            component,
            method_name: method_name.into(),
        }
    }

    /// Context of a call with no enclosing method
    pub fn unresolved() -> Self {
        Self::new(ComponentKind::Unresolved, "")
    }

    pub fn is_platform_component(&self) -> bool {
        self.component.is_platform_component()
    }

    pub fn is_in(&self, hook: LifecycleHook) -> bool {
        self.method_name == hook.method_name()
    }
}
