/*
 * Lifecycle Domain Models
 *
 * Core domain types for resource-lifecycle analysis.
 */

mod call_site;
mod hooks;
mod resource;
mod violations;

pub use call_site::{BindingKey, CallSite};
pub use hooks::{CallerContext, ComponentKind, LifecycleHook};
pub use resource::{CallRole, ResourceApi, ResourceKind};
pub use violations::{Category, Diagnostic, Issue, Severity, ViolationKind};
