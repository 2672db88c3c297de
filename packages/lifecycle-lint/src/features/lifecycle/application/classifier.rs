/*
 * Call Classifier
 *
 * Decides whether a call site targets one of the enabled resource APIs.
 *
 * # Algorithm
 * 1. Exact method-name match against each API's acquire/release names
 *    (no resolution yet: most calls stop here)
 * 2. Resolve the call's owning type once
 * 3. Ancestry test against the API's qualifying base types
 *
 * A miss at any step yields `None`; it is not an error.
 */

use crate::features::lifecycle::domain::{CallRole, CallSite, ResourceApi, ResourceKind};
use crate::features::lifecycle::infrastructure::resource_api;
use crate::features::lifecycle::ports::TypeResolver;
use crate::shared::models::TypeRef;
use tracing::{debug, trace};

/// A call site recognized as an acquire/release of a resource API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: ResourceKind,
    pub role: CallRole,

    /// Resolved owning type of the invoked method
    pub owning_type: TypeRef,
}

/// Classifies call sites against a closed set of resource APIs
#[derive(Debug, Clone)]
pub struct CallClassifier {
    apis: Vec<&'static ResourceApi>,
}

impl CallClassifier {
    /// Classifier for the given resource kinds
    pub fn new(kinds: impl IntoIterator<Item = ResourceKind>) -> Self {
        let mut apis: Vec<&'static ResourceApi> = Vec::new();
        for kind in kinds {
            let api = resource_api(kind);
            if !apis.iter().any(|known| known.kind == kind) {
                apis.push(api);
            }
        }
        Self { apis }
    }

    /// Method names the host should report call sites for
    pub fn applicable_method_names(&self) -> Vec<&'static str> {
        self.apis.iter().flat_map(|api| api.method_names()).collect()
    }

    pub fn is_applicable(&self, method_name: &str) -> bool {
        self.apis.iter().any(|api| api.role_of(method_name).is_some())
    }

    pub fn kinds(&self) -> impl Iterator<Item = ResourceKind> + '_ {
        self.apis.iter().map(|api| api.kind)
    }

    /// Classify `call`, resolving its owning type only on a name match
    pub fn classify<R>(&self, call: &CallSite, resolver: &R) -> Option<Classification>
    where
        R: TypeResolver + ?Sized,
    {
        let mut owning_type: Option<Option<TypeRef>> = None;

        for api in &self.apis {
            let Some(role) = api.role_of(&call.method_name) else {
                continue;
            };

            let resolved = owning_type.get_or_insert_with(|| resolver.owning_type(call));
            let Some(ty) = resolved.as_ref() else {
                debug!(
                    "{}() at {}: owning type unresolved, skipping",
                    call.method_name, call.span
                );
                return None;
            };

            if api
                .qualifying_types
                .iter()
                .any(|base| resolver.is_subtype_of(ty, base))
            {
                trace!("{}() at {} classified as {} {:?}", call.method_name, call.span, api.kind, role);
                return Some(Classification {
                    kind: api.kind,
                    role,
                    owning_type: ty.clone(),
                });
            }

            debug!(
                "{}() at {}: owner {} is not a {} type",
                call.method_name, call.span, ty, api.display_name
            );
        }

        None
    }
}

impl Default for CallClassifier {
    fn default() -> Self {
        Self::new(ResourceKind::ALL)
    }
}
